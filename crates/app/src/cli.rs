//! Native command line: `biriyani-world [--route <path>]`.

use clap::Parser;
use storefront::route::Route;

#[derive(Parser, Debug)]
#[command(author, version, about = "Biriyani World storefront")]
pub struct Cli {
    /// Page to open first, e.g. `/menu` or `/review`. Unknown paths open the
    /// landing page.
    #[arg(long, default_value = "/")]
    pub route: String,
}

impl Cli {
    pub fn initial_route(&self) -> Route {
        Route::from_path_or_landing(&self.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_for(args: &[&str]) -> Route {
        Cli::try_parse_from(args.iter().copied())
            .unwrap()
            .initial_route()
    }

    #[test]
    fn test_no_flag_starts_on_landing() {
        assert_eq!(route_for(&["biriyani-world"]), Route::Landing);
    }

    #[test]
    fn test_route_flag_with_separate_value() {
        assert_eq!(
            route_for(&["biriyani-world", "--route", "/review"]),
            Route::Review
        );
    }

    #[test]
    fn test_route_flag_with_equals() {
        assert_eq!(
            route_for(&["biriyani-world", "--route=/menu-preview"]),
            Route::MenuPreview
        );
    }

    #[test]
    fn test_unknown_route_falls_back_to_landing() {
        assert_eq!(
            route_for(&["biriyani-world", "--route", "/checkout"]),
            Route::Landing
        );
    }

    #[test]
    fn test_misspelled_flag_is_rejected() {
        let err = Cli::try_parse_from(["biriyani-world", "--rout", "/menu"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_dangling_flag_is_rejected() {
        assert!(Cli::try_parse_from(["biriyani-world", "--route"]).is_err());
    }
}
