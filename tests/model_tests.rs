mod common;
use common::{appt, shop_store};
use rturnos::errors::AppError;
use rturnos::models::{
    AppointmentStatus, AppointmentType, Notification, NotificationsSent, StatusAction,
};

#[test]
fn test_type_labels_accept_missing_accents() {
    assert_eq!(
        AppointmentType::from_label("reparacion"),
        Some(AppointmentType::Repair)
    );
    assert_eq!(
        AppointmentType::from_label(" DIAGNÓSTICO "),
        Some(AppointmentType::Diagnostic)
    );
    assert_eq!(
        AppointmentType::from_label("Colocacion"),
        Some(AppointmentType::Installation)
    );
    assert_eq!(AppointmentType::from_label("Venta"), None);

    for kind in AppointmentType::ALL {
        assert_eq!(AppointmentType::from_label(kind.label()), Some(kind));
    }
}

#[test]
fn test_status_labels() {
    assert_eq!(
        AppointmentStatus::from_label("confirmado"),
        Some(AppointmentStatus::Confirmed)
    );
    assert_eq!(
        AppointmentStatus::from_label("NoShow"),
        Some(AppointmentStatus::NoShow)
    );
    assert_eq!(AppointmentStatus::from_label("Borrado"), None);
    assert_eq!(AppointmentStatus::default(), AppointmentStatus::Pending);
    assert_eq!(StatusAction::NoShow.to_string(), "no-show");
}

#[test]
fn test_notification_flags() {
    let mut sent = NotificationsSent::default();

    assert!(!sent.is_sent(Notification::Reminder2h));
    assert!(sent.mark(Notification::Reminder2h));
    assert!(!sent.mark(Notification::Reminder2h));
    assert!(sent.is_sent(Notification::Reminder2h));
    assert!(!sent.is_sent(Notification::Confirmation));
}

#[test]
fn test_blank_notes_are_dropped() {
    let mut store = shop_store();
    store
        .add(appt("n1", "2025-12-04", "10:00", 30).with_notes("   "))
        .unwrap();
    store
        .add(appt("n2", "2025-12-04", "11:00", 30).with_notes("Trae cargador"))
        .unwrap();

    assert_eq!(store.get("n1").unwrap().notes, None);
    assert_eq!(
        store.get("n2").unwrap().notes.as_deref(),
        Some("Trae cargador")
    );
}

#[test]
fn test_count_with_status_across_days() {
    let mut store = shop_store();
    store.add(appt("c1", "2025-12-04", "10:00", 30)).unwrap();
    store.add(appt("c2", "2025-12-05", "10:00", 30)).unwrap();
    store.add(appt("c3", "2025-12-06", "10:00", 30)).unwrap();
    store.transition("c2", StatusAction::Confirm).unwrap();

    assert_eq!(store.count_with_status(AppointmentStatus::Pending), 2);
    assert_eq!(store.count_with_status(AppointmentStatus::Confirmed), 1);
    assert_eq!(store.count_with_status(AppointmentStatus::NoShow), 0);
}

#[test]
fn test_recoverable_errors() {
    assert!(AppError::Validation("x".into()).is_recoverable());
    assert!(AppError::DuplicateId("a1".into()).is_recoverable());
    assert!(!AppError::NotFound("a1".into()).is_recoverable());
    assert!(!AppError::Config("x".into()).is_recoverable());
}
