use combobox::toggle::Toggle;

#[test]
fn test_default_is_off() {
    assert!(!Toggle::default().is_on());
}

#[test]
fn test_set_true_reports_change_once() {
    let mut toggle = Toggle::new(false);
    assert!(toggle.set_true());
    assert!(!toggle.set_true());
    assert!(toggle.is_on());
}

#[test]
fn test_set_false_reports_change_once() {
    let mut toggle = Toggle::from(true);
    assert!(toggle.set_false());
    assert!(!toggle.set_false());
    assert!(!toggle.is_on());
}
