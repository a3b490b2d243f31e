use serde::{Deserialize, Serialize};

/// Kind of visit booked in the agenda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentType {
    #[serde(rename = "Reparación")]
    Repair,
    #[serde(rename = "Diagnóstico")]
    Diagnostic,
    #[serde(rename = "Colocación")]
    Installation,
    #[serde(rename = "Entrega")]
    Delivery,
    #[serde(rename = "Presupuesto")]
    Quote,
}

impl AppointmentType {
    pub const ALL: [AppointmentType; 5] = [
        AppointmentType::Repair,
        AppointmentType::Diagnostic,
        AppointmentType::Installation,
        AppointmentType::Delivery,
        AppointmentType::Quote,
    ];

    /// Label shown in the agenda (and used in fixture files).
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentType::Repair => "Reparación",
            AppointmentType::Diagnostic => "Diagnóstico",
            AppointmentType::Installation => "Colocación",
            AppointmentType::Delivery => "Entrega",
            AppointmentType::Quote => "Presupuesto",
        }
    }

    /// Accepts the label, with or without accents, in any case.
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = fold_accents(s.trim());
        Self::ALL
            .into_iter()
            .find(|t| fold_accents(t.label()) == wanted)
    }
}

fn fold_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'Á' => 'a',
            'é' | 'É' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'Ó' => 'o',
            'ú' | 'Ú' => 'u',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
