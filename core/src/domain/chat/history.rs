//! Conversation history clean-up before it is handed to the model.
//!
//! Gemini requires the history to start with a user turn and to alternate
//! roles. Client-side transcripts break both rules (retries, dropped replies,
//! an assistant greeting shown before the user typed anything).

use thiserror::Error;

use crate::domain::{
    chat::entities::{ChatRole, ChatTurn},
    common::entities::app_errors::CoreError,
};

pub const SYNTHETIC_OPENING: &str = "Start the conversation";

/// What to do when the cleaned history does not open with a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingTurnPolicy {
    Reject,
    /// Prepend a placeholder user turn with [`SYNTHETIC_OPENING`].
    Synthesize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("Invalid conversation history. First message must be from user.")]
    MissingLeadingUser,
}

impl From<HistoryError> for CoreError {
    fn from(err: HistoryError) -> Self {
        CoreError::InvalidHistory(err.to_string())
    }
}

/// Drops blank turns, collapses runs of the same role to their first turn and
/// enforces a leading user turn according to `policy`.
pub fn prepare_history(
    turns: impl IntoIterator<Item = ChatTurn>,
    policy: LeadingTurnPolicy,
) -> Result<Vec<ChatTurn>, HistoryError> {
    let mut prepared: Vec<ChatTurn> = Vec::new();

    for turn in turns {
        let content = turn.content.trim();
        if content.is_empty() {
            continue;
        }

        if prepared.last().is_some_and(|last| last.role == turn.role) {
            continue;
        }

        prepared.push(ChatTurn::new(turn.role, content));
    }

    match prepared.first() {
        Some(first) if first.role != ChatRole::User => match policy {
            LeadingTurnPolicy::Reject => Err(HistoryError::MissingLeadingUser),
            LeadingTurnPolicy::Synthesize => {
                prepared.insert(0, ChatTurn::user(SYNTHETIC_OPENING));
                Ok(prepared)
            }
        },
        _ => Ok(prepared),
    }
}

/// Folds a trailing user turn into the outgoing `message` so the model still
/// sees alternating roles once the message is sent as the next user turn.
pub fn merge_pending_user_turn(history: &mut Vec<ChatTurn>, message: String) -> String {
    if !history.last().is_some_and(|turn| turn.role == ChatRole::User) {
        return message;
    }

    match history.pop() {
        Some(pending) => format!("{}\n\n{}", pending.content, message),
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_history_is_kept() {
        let history = vec![ChatTurn::user("hi"), ChatTurn::assistant("hello")];
        assert_eq!(
            prepare_history(history.clone(), LeadingTurnPolicy::Reject).unwrap(),
            history
        );
    }

    #[test]
    fn test_empty_history_is_fine_under_both_policies() {
        assert!(prepare_history(vec![], LeadingTurnPolicy::Reject).unwrap().is_empty());
        assert!(
            prepare_history(vec![], LeadingTurnPolicy::Synthesize)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_blank_turns_are_dropped_and_content_trimmed() {
        let history = vec![
            ChatTurn::user("  how often should I water tulsi?  "),
            ChatTurn::assistant("   "),
            ChatTurn::assistant(""),
            ChatTurn::assistant("Every two days in summer."),
        ];

        assert_eq!(
            prepare_history(history, LeadingTurnPolicy::Reject).unwrap(),
            vec![
                ChatTurn::user("how often should I water tulsi?"),
                ChatTurn::assistant("Every two days in summer."),
            ]
        );
    }

    #[test]
    fn test_consecutive_roles_collapse_to_first() {
        let history = vec![
            ChatTurn::user("one"),
            ChatTurn::user("two"),
            ChatTurn::assistant("three"),
            ChatTurn::assistant("four"),
            ChatTurn::user("five"),
        ];

        let prepared = prepare_history(history, LeadingTurnPolicy::Reject).unwrap();

        assert_eq!(
            prepared,
            vec![
                ChatTurn::user("one"),
                ChatTurn::assistant("three"),
                ChatTurn::user("five"),
            ]
        );
        assert!(prepared.windows(2).all(|pair| pair[0].role != pair[1].role));
    }

    #[test]
    fn test_blank_turn_between_same_roles_still_collapses() {
        let history = vec![
            ChatTurn::user("one"),
            ChatTurn::assistant(" "),
            ChatTurn::user("two"),
        ];

        assert_eq!(
            prepare_history(history, LeadingTurnPolicy::Reject).unwrap(),
            vec![ChatTurn::user("one")]
        );
    }

    #[test]
    fn test_leading_assistant_is_rejected() {
        let history = vec![ChatTurn::assistant("hi")];
        assert_eq!(
            prepare_history(history, LeadingTurnPolicy::Reject),
            Err(HistoryError::MissingLeadingUser)
        );
    }

    #[test]
    fn test_leading_assistant_is_synthesized() {
        let history = vec![ChatTurn::assistant("hi")];
        assert_eq!(
            prepare_history(history, LeadingTurnPolicy::Synthesize).unwrap(),
            vec![ChatTurn::user(SYNTHETIC_OPENING), ChatTurn::assistant("hi")]
        );
    }

    #[test]
    fn test_leading_check_runs_after_filtering() {
        let history = vec![ChatTurn::user("   "), ChatTurn::assistant("Namaste!")];
        assert_eq!(
            prepare_history(history, LeadingTurnPolicy::Reject),
            Err(HistoryError::MissingLeadingUser)
        );
    }

    #[test]
    fn test_trailing_user_turn_is_merged_into_message() {
        let mut history = vec![
            ChatTurn::user("hi"),
            ChatTurn::assistant("hello"),
            ChatTurn::user("my neem has white spots"),
        ];

        let message = merge_pending_user_turn(&mut history, "what should I do?".to_string());

        assert_eq!(message, "my neem has white spots\n\nwhat should I do?");
        assert_eq!(
            history,
            vec![ChatTurn::user("hi"), ChatTurn::assistant("hello")]
        );
    }

    #[test]
    fn test_message_is_untouched_after_assistant_turn() {
        let mut history = vec![ChatTurn::user("hi"), ChatTurn::assistant("hello")];

        let message = merge_pending_user_turn(&mut history, "next".to_string());

        assert_eq!(message, "next");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_history_error_maps_to_invalid_history() {
        assert_eq!(
            CoreError::from(HistoryError::MissingLeadingUser),
            CoreError::InvalidHistory(
                "Invalid conversation history. First message must be from user.".to_string()
            )
        );
    }
}
