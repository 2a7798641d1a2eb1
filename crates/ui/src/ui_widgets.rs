//! Reusable themed widget helpers for the storefront pages.
//!
//! Form widgets never write to the form resources directly. They push
//! [`OrderAction::SetField`] into the [`ActionQueue`] when the user edits a
//! value, and the executor applies it later in the same frame.

use bevy_egui::egui;
use storefront::checkout::{Branch, CheckoutField, FieldProblem};
use storefront::money::Money;
use storefront::order_actions::{ActionQueue, FormKind, OrderAction};

use crate::theme;

// =============================================================================
// Layout
// =============================================================================

/// White rounded card used for every content block.
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(theme::CARD_BG)
        .corner_radius(egui::CornerRadius::same(theme::CARD_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Full-width band painted in the brand red, used by the header and footer.
pub fn red_band<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(theme::BRAND_RED)
        .inner_margin(egui::Margin::symmetric(16, 20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

// =============================================================================
// Text
// =============================================================================

pub fn themed_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .color(theme::TEXT)
            .strong(),
    );
}

pub fn themed_subheading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SUBHEADING)
            .color(theme::TEXT)
            .strong(),
    );
}

/// Render a muted caption / small text line.
pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
}

// =============================================================================
// Buttons
// =============================================================================

const BUTTON_SIZE: egui::Vec2 = egui::Vec2 { x: 200.0, y: 40.0 };

/// The main call to action of a section, filled with the brand red.
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .size(theme::FONT_SUBHEADING)
            .color(theme::TEXT_ON_RED)
            .strong(),
    )
    .fill(theme::BRAND_RED)
    .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
    .min_size(BUTTON_SIZE);
    ui.add(button)
}

/// Secondary action, goldenrod fill.
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .size(theme::FONT_BODY)
            .color(theme::TEXT)
            .strong(),
    )
    .fill(theme::GOLDENROD)
    .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS));
    ui.add(button)
}

/// Underlined text link such as "Explore Menu →".
pub fn text_link(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(text)
                .size(theme::FONT_BODY)
                .underline(),
        )
        .frame(false),
    )
}

// =============================================================================
// Money
// =============================================================================

/// `label ........ Rs.850` with the amount right-aligned.
pub fn money_row(ui: &mut egui::Ui, label: &str, amount: Money, emphasize: bool) {
    ui.horizontal(|ui| {
        let mut label_text = egui::RichText::new(label)
            .size(theme::FONT_BODY)
            .color(theme::TEXT);
        let mut value_text = egui::RichText::new(amount.to_string())
            .size(theme::FONT_BODY)
            .color(theme::TEXT);
        if emphasize {
            label_text = label_text.strong();
            value_text = value_text.strong().size(theme::FONT_SUBHEADING);
        }
        ui.label(label_text);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value_text);
        });
    });
}

// =============================================================================
// Cart
// =============================================================================

/// `[-] 3 [+]` stepper for one menu item.
pub fn quantity_stepper(ui: &mut egui::Ui, queue: &mut ActionQueue, item: &str, quantity: u32) {
    let size = egui::vec2(28.0, 28.0);
    ui.horizontal(|ui| {
        if ui
            .add_sized(size, egui::Button::new(egui::RichText::new("-").strong()))
            .clicked()
        {
            queue.push(OrderAction::DecrementItem {
                item: item.to_string(),
            });
        }
        ui.label(
            egui::RichText::new(quantity.to_string())
                .size(theme::FONT_SUBHEADING)
                .strong(),
        );
        if ui
            .add_sized(size, egui::Button::new(egui::RichText::new("+").strong()))
            .clicked()
        {
            queue.push(OrderAction::IncrementItem {
                item: item.to_string(),
            });
        }
    });
}

// =============================================================================
// Forms
// =============================================================================

fn field_label(ui: &mut egui::Ui, text: &str, required: bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        ui.label(egui::RichText::new(text).size(theme::FONT_BODY).color(theme::TEXT));
        if required {
            ui.label(egui::RichText::new("*").color(theme::ERROR));
        }
    });
}

fn problem_note(ui: &mut egui::Ui, field: CheckoutField, problem: Option<FieldProblem>) {
    let text = match problem {
        None => return,
        Some(FieldProblem::Missing) => "This field is required".to_string(),
        Some(FieldProblem::Invalid) => format!("Use the format {}", field.placeholder()),
    };
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::ERROR),
    );
}

/// Labelled single-line text input bound to one checkout field.
pub fn form_field(
    ui: &mut egui::Ui,
    queue: &mut ActionQueue,
    form: FormKind,
    field: CheckoutField,
    value: &str,
    problem: Option<FieldProblem>,
) {
    field_label(ui, field.label(), field.is_required());
    let mut buffer = value.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .id_salt((form, field.key()))
            .hint_text(field.placeholder())
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        queue.push(OrderAction::SetField {
            form,
            field,
            value: buffer,
        });
    }
    problem_note(ui, field, problem);
    ui.add_space(theme::ITEM_SPACING);
}

/// Drop-down for the branch field, offering only `branches`.
pub fn branch_select(
    ui: &mut egui::Ui,
    queue: &mut ActionQueue,
    form: FormKind,
    value: &str,
    branches: &[Branch],
) {
    field_label(ui, CheckoutField::Branch.label(), false);
    let selected_text = Branch::from_value(value)
        .map(Branch::label)
        .unwrap_or("Select");
    let mut selected = value.to_string();
    egui::ComboBox::from_id_salt((form, CheckoutField::Branch.key()))
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for branch in branches {
                ui.selectable_value(&mut selected, branch.value().to_string(), branch.label());
            }
        });
    if selected != value {
        queue.push(OrderAction::SetField {
            form,
            field: CheckoutField::Branch,
            value: selected,
        });
    }
    ui.add_space(theme::ITEM_SPACING);
}

/// Render every field of a checkout-shaped form in its canonical order.
pub fn checkout_fields(
    ui: &mut egui::Ui,
    queue: &mut ActionQueue,
    form: FormKind,
    values: &storefront::checkout::CheckoutForm,
    branches: &[Branch],
    problem: impl Fn(CheckoutField) -> Option<FieldProblem>,
) {
    for field in CheckoutField::ALL {
        match field {
            CheckoutField::Branch => {
                branch_select(ui, queue, form, values.get(field), branches);
            }
            _ => form_field(ui, queue, form, field, values.get(field), problem(field)),
        }
    }
}
