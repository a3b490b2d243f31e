//! Status → presentation lookup used by the terminal views.
//! The core only knows the enum; colours and badges live here.

use crate::models::AppointmentStatus;
use crate::utils::colors::{GREEN, GREY, MAGENTA, RED, RESET, YELLOW};

pub struct StatusStyle {
    pub color: &'static str,
    pub badge: &'static str,
}

static STYLES: [(AppointmentStatus, StatusStyle); 5] = [
    (
        AppointmentStatus::Confirmed,
        StatusStyle {
            color: GREEN,
            badge: "🟢",
        },
    ),
    (
        AppointmentStatus::Pending,
        StatusStyle {
            color: YELLOW,
            badge: "🟡",
        },
    ),
    (
        AppointmentStatus::Cancelled,
        StatusStyle {
            color: RED,
            badge: "🔴",
        },
    ),
    (
        AppointmentStatus::Completed,
        StatusStyle {
            color: GREY,
            badge: "⚪",
        },
    ),
    (
        AppointmentStatus::NoShow,
        StatusStyle {
            color: MAGENTA,
            badge: "⚫",
        },
    ),
];

pub fn style_for(status: AppointmentStatus) -> &'static StatusStyle {
    STYLES
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, style)| style)
        .unwrap_or(&STYLES[1].1)
}

/// Status label wrapped in its colour.
pub fn colorize_status(status: AppointmentStatus) -> String {
    let style = style_for(status);
    format!("{}{}{}", style.color, status.label(), RESET)
}

pub fn badge(status: AppointmentStatus) -> &'static str {
    style_for(status).badge
}
