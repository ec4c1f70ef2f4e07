use combobox::prelude::*;

fn combobox() -> Combobox {
    let config = ComboboxConfig::new()
        .multiple()
        .instance_id(InstanceId::from_seed("cb").unwrap());
    Combobox::with_inputs(
        config,
        ComboboxInputs::new()
            .multiple()
            .actions_before([Action::new("clear", "Clear", || {})])
            .items([
                Item::new("us", "United States"),
                Item::new("de", "Germany").disabled(),
            ])
            .selection(["us"].into_iter().collect()),
    )
}

#[test]
fn test_roles_and_content_id() {
    let model = combobox().render_model();
    assert_eq!(model.control_role, Role::Combobox);
    assert_eq!(model.content_role, Role::Listbox);
    assert_eq!(model.content_role.as_str(), "listbox");
    assert_eq!(model.content_id, "cb-listbox");
    assert!(model.entries.iter().all(|e| e.role == Role::Option));
}

#[test]
fn test_entries_carry_state() {
    let model = combobox().render_model();
    let kinds: Vec<RenderedKind> = model.entries.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        [RenderedKind::Action, RenderedKind::Item, RenderedKind::Item]
    );

    assert_eq!(model.entries[0].value, None);
    assert!(!model.entries[0].selected);
    assert!(model.entries[1].selected);
    assert_eq!(model.entries[1].label, "United States");
    assert!(!model.entries[2].selected);
    assert!(model.entries[2].disabled);
}

#[test]
fn test_active_descendant_follows_cursor() {
    let mut combobox = combobox();
    let model = combobox.render_model();
    assert!(!model.open);
    assert_eq!(model.active_descendant, None);
    assert!(model.active_entry().is_none());

    combobox.handle(ComboboxInput::Focus);
    combobox.handle(ComboboxInput::Key(KeyCombo::key(Key::Down)));
    combobox.handle(ComboboxInput::Key(KeyCombo::key(Key::Down)));

    let model = combobox.render_model();
    assert!(model.open);
    assert_eq!(model.active_descendant.as_deref(), Some("cb-1"));
    assert_eq!(model.active_entry().map(|e| e.id.as_str()), Some("cb-1"));
    assert_eq!(model.entries.iter().filter(|e| e.active).count(), 1);
}

#[test]
fn test_empty_state_only_without_entries() {
    let mut combobox = combobox();
    combobox.set_auxiliary(AuxiliaryContent::empty_state());
    assert!(!combobox.render_model().show_empty_state);

    combobox.set_inputs(ComboboxInputs::new().auxiliary(AuxiliaryContent::empty_state()));
    assert!(combobox.render_model().show_empty_state);
}
