use eframe::egui::Color32;

use crate::data::model::{CaseStatus, PartyKind};

// ---------------------------------------------------------------------------
// Fixed palette: enum variant → Color32
// ---------------------------------------------------------------------------

/// Accent for debt amounts and other destructive emphasis.
pub const DEBT: Color32 = Color32::from_rgb(239, 68, 68);

/// Badge colour for a case status.
pub fn status_color(status: CaseStatus) -> Color32 {
    match status {
        CaseStatus::Active => Color32::from_rgb(59, 130, 246),
        CaseStatus::Completed => Color32::from_rgb(34, 197, 94),
        CaseStatus::Suspended => Color32::from_rgb(234, 179, 8),
    }
}

/// Badge colour for a party kind.
pub fn kind_color(kind: PartyKind) -> Color32 {
    match kind {
        PartyKind::Legal => Color32::from_rgb(99, 102, 241),
        PartyKind::Individual => Color32::from_rgb(20, 184, 166),
    }
}
