// The search form controller: transient UI state for the hero search bar,
// mutated only through one named transition per user event. Submitting
// packages the fields into a FilterCriteria; the page-level owner replaces
// its committed criteria wholesale and resets pagination to page 1.

use crate::models::FilterCriteria;

pub const MIN_PRICE_MESSAGE: &str = "Min price must be less than max price";
pub const MAX_PRICE_MESSAGE: &str = "Max price must be greater than min price";

/// Cross-field validation result for the price bounds. Computed by one
/// function over both bounds so the two fields' error state cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBoundsCheck {
    pub min_error: Option<&'static str>,
    pub max_error: Option<&'static str>,
}

impl PriceBoundsCheck {
    pub fn is_valid(&self) -> bool {
        self.min_error.is_none() && self.max_error.is_none()
    }
}

/// Both bounds present with min >= max is the only inconsistent shape;
/// a missing bound is unconstrained and always consistent.
pub fn validate_price_bounds(min: Option<f64>, max: Option<f64>) -> PriceBoundsCheck {
    match (min, max) {
        (Some(min), Some(max)) if min >= max => PriceBoundsCheck {
            min_error: Some(MIN_PRICE_MESSAGE),
            max_error: Some(MAX_PRICE_MESSAGE),
        },
        _ => PriceBoundsCheck {
            min_error: None,
            max_error: None,
        },
    }
}

/// Parses a price field entry. Empty clears the bound; anything that is not
/// a non-negative number is rejected.
fn parse_price_entry(raw: &str) -> Result<Option<f64>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(()),
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    keyword: String,
    selected_make: String,
    selected_model: String,
    min_price: Option<f64>,
    max_price: Option<f64>,
    min_price_error: Option<&'static str>,
    max_price_error: Option<&'static str>,
    price_popup_open: bool,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    // Plain field edits, no validation involved.

    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword = keyword.to_string();
    }

    /// Choosing a make invalidates any previously chosen model: the model
    /// facet is scoped to the make.
    pub fn select_make(&mut self, make: &str) {
        if self.selected_make != make {
            self.selected_model.clear();
        }
        self.selected_make = make.to_string();
    }

    pub fn select_model(&mut self, model: &str) {
        self.selected_model = model.to_string();
    }

    // Price editing. A rejected entry leaves the field untouched; an
    // accepted one recomputes both fields' error state.

    pub fn edit_min_price(&mut self, raw: &str) {
        if let Ok(value) = parse_price_entry(raw) {
            self.min_price = value;
            self.revalidate_prices();
        }
    }

    pub fn edit_max_price(&mut self, raw: &str) {
        if let Ok(value) = parse_price_entry(raw) {
            self.max_price = value;
            self.revalidate_prices();
        }
    }

    fn revalidate_prices(&mut self) {
        let check = validate_price_bounds(self.min_price, self.max_price);
        self.min_price_error = check.min_error;
        self.max_price_error = check.max_error;
    }

    // Price popup lifecycle.

    pub fn toggle_price_popup(&mut self) {
        self.price_popup_open = !self.price_popup_open;
    }

    /// The popup's Apply action: re-validates and refuses to close while the
    /// bounds are inconsistent. Returns whether the popup closed.
    pub fn apply_price(&mut self) -> bool {
        self.revalidate_prices();
        if self.min_price_error.is_some() || self.max_price_error.is_some() {
            return false;
        }
        self.price_popup_open = false;
        true
    }

    /// Pointer interaction outside the popup: closes it without committing
    /// anything beyond what inline editing already accepted.
    pub fn dismiss_price_popup(&mut self) {
        self.price_popup_open = false;
    }

    /// The Search action: packages the current fields into one
    /// FilterCriteria value, exactly once per submission.
    pub fn submit(&self) -> FilterCriteria {
        FilterCriteria {
            keyword: self.keyword.clone(),
            make: self.selected_make.clone(),
            model: self.selected_model.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }

    // Read accessors for rendering.

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn selected_make(&self) -> &str {
        &self.selected_make
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    pub fn min_price(&self) -> Option<f64> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }

    pub fn min_price_error(&self) -> Option<&'static str> {
        self.min_price_error
    }

    pub fn max_price_error(&self) -> Option<&'static str> {
        self.max_price_error
    }

    pub fn price_popup_open(&self) -> bool {
        self.price_popup_open
    }

    /// Display text for the collapsed price field, mirroring which bounds
    /// are set.
    pub fn price_summary(&self) -> String {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => format!("£{min} - £{max}"),
            (Some(min), None) => format!("From £{min}"),
            (None, Some(max)) => format!("Up to £{max}"),
            (None, None) => "Select price range".to_string(),
        }
    }
}
