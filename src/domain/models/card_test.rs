use super::CardState;
use super::SessionCard;

#[test]
fn it_confirms_a_rename_and_returns_the_input() {
    let mut card = SessionCard::new();

    card.begin_rename("Session · 27 Mar 2024, 14:02");
    card.set_input("Loop cleanup");

    assert_eq!(card.confirm_rename(), Some("Loop cleanup".to_string()));
    assert_eq!(card.state(), &CardState::Viewing);
}

#[test]
fn it_discards_input_on_cancel() {
    let mut card = SessionCard::new();

    card.begin_rename("Original");
    card.set_input("Half typed");
    card.cancel_rename();

    assert_eq!(card.state(), &CardState::Viewing);
    assert_eq!(card.confirm_rename(), None);
}

#[test]
fn it_arms_and_cancels_delete_confirmation() {
    let mut card = SessionCard::new();

    card.request_delete();
    assert_eq!(card.state(), &CardState::ConfirmingDelete);

    card.cancel_delete();
    assert_eq!(card.state(), &CardState::Viewing);
    assert!(!card.confirm_delete());
}

#[test]
fn it_only_confirms_delete_when_armed() {
    let mut card = SessionCard::new();

    card.request_delete();
    assert!(card.confirm_delete());
    assert_eq!(card.state(), &CardState::Viewing);

    assert!(!card.confirm_delete());
}

#[test]
fn it_cannot_rename_and_confirm_delete_at_once() {
    let mut card = SessionCard::new();

    card.begin_rename("Original");
    card.request_delete();
    assert!(matches!(card.state(), CardState::Renaming { .. }));

    card.cancel_rename();
    card.request_delete();
    card.begin_rename("Original");
    assert_eq!(card.state(), &CardState::ConfirmingDelete);
}

#[test]
fn it_toggles_expansion_independently_of_mode() {
    let mut card = SessionCard::new();

    card.toggle_expanded();
    assert!(card.expanded);

    card.request_delete();
    card.toggle_expanded();
    assert!(!card.expanded);
    assert_eq!(card.state(), &CardState::ConfirmingDelete);
}
