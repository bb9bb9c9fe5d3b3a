use time::Date;

/// One planned (rencana) or actual (realisasi) fertilizer application.
///
/// Both series share this shape; which table a record came from decides how it
/// is accumulated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationRecord {
    pub estate: String,
    pub round: Option<i64>,
    pub quantity_kg: Option<f64>,
    pub applied_on: Option<Date>,
}

impl ApplicationRecord {
    pub fn new(estate: impl Into<String>) -> Self {
        Self {
            estate: estate.into(),
            ..Default::default()
        }
    }

    pub fn round(mut self, round: i64) -> Self {
        self.round = Some(round);
        self
    }

    pub fn quantity(mut self, kg: f64) -> Self {
        self.quantity_kg = Some(kg);
        self
    }

    pub fn on(mut self, date: Date) -> Self {
        self.applied_on = Some(date);
        self
    }

    /// Quantity in kilograms, absent counts as zero.
    pub fn kg(&self) -> f64 {
        self.quantity_kg.unwrap_or_default()
    }

    /// Zero-based slot for rounds 1, 2 and 3; every other value is unknown.
    pub fn round_index(&self) -> Option<usize> {
        match self.round {
            Some(1) => Some(0),
            Some(2) => Some(1),
            Some(3) => Some(2),
            _ => None,
        }
    }
}
