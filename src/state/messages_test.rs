use super::*;

#[test]
fn messages_state_default_is_empty() {
    let state = MessagesState::default();
    assert!(state.items.is_empty());
}

#[test]
fn push_assigns_increasing_ids_in_display_order() {
    let mut state = MessagesState::default();
    let first = state.push(MessageKind::Info, "one", 1000);
    let second = state.push(MessageKind::Error, "two", 0);
    assert!(second > first);
    let contents: Vec<_> = state.items.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["one", "two"]);
    assert_eq!(state.items[1].duration_ms, 0);
}

#[test]
fn shortcut_helpers_use_default_duration() {
    let mut state = MessagesState::default();
    state.error("e");
    state.warning("w");
    state.info("i");
    state.success("s");
    let kinds: Vec<_> = state.items.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        [MessageKind::Error, MessageKind::Warning, MessageKind::Info, MessageKind::Success]
    );
    assert!(state.items.iter().all(|m| m.duration_ms == config::DEFAULT_MESSAGE_DURATION_MS));
}

#[test]
fn remove_drops_only_matching_message() {
    let mut state = MessagesState::default();
    let a = state.info("a");
    let b = state.info("b");
    state.remove(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.remove(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut state = MessagesState::default();
    let a = state.info("a");
    state.remove(a);
    let b = state.info("b");
    assert_ne!(a, b);
}

#[test]
fn message_kind_css_classes_are_distinct() {
    let classes = [
        MessageKind::Error.css_class(),
        MessageKind::Warning.css_class(),
        MessageKind::Info.css_class(),
        MessageKind::Success.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
