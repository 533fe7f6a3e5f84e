use std::str::FromStr;

/// Quality grades the model is asked to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityLabel {
    Unhealthy,
    Bad,
    CantDetermine,
    Good,
    VeryGood,
}

impl QualityLabel {
    pub const ALL: [QualityLabel; 5] = [
        QualityLabel::Unhealthy,
        QualityLabel::Bad,
        QualityLabel::CantDetermine,
        QualityLabel::Good,
        QualityLabel::VeryGood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLabel::Unhealthy => "Unhealthy",
            QualityLabel::Bad => "Bad",
            QualityLabel::CantDetermine => "Can't Determine",
            QualityLabel::Good => "Good",
            QualityLabel::VeryGood => "Very Good",
        }
    }
}

impl FromStr for QualityLabel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QualityLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or(())
    }
}
