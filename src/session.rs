use serde::{Deserialize, Serialize};

use crate::models::{Message, PendingReply, Sender};
use crate::reply::scripted_reply;

/// Which contact a deferred reply is attributed to.
///
/// `AtSend` captures the contact when the message is submitted; if the view
/// has switched to another contact by the time the timer fires, the reply is
/// dropped along with the rest of the discarded conversation. `AtFire` keeps
/// the legacy behaviour: the reply names whichever contact is active when the
/// timer fires and is always appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReplyAttribution {
    #[default]
    AtSend,
    AtFire,
}

/// Widget state for the single conversation in view: the selected contact and
/// the messages shown since the last contact switch. Holds no toolkit handles;
/// the UI layer renders whatever these methods return.
pub struct ChatSession {
    active: String,
    messages: Vec<Message>,
    attribution: ReplyAttribution,
}

impl ChatSession {
    pub fn new(default_contact: impl Into<String>, attribution: ReplyAttribution) -> Self {
        Self {
            active: default_contact.into(),
            messages: Vec::new(),
            attribution,
        }
    }

    pub fn active_contact(&self) -> &str {
        &self.active
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Switch the view to `name`. The message list is discarded; no history is
    /// kept across contact switches.
    pub fn select_contact(&mut self, name: &str) {
        self.active = name.to_string();
        self.messages.clear();
    }

    /// Submit raw input from the entry. Whitespace-only input is ignored and
    /// returns `None`. Otherwise the trimmed user message is appended and the
    /// returned `PendingReply` carries what the deferred callback needs at
    /// fire time.
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(Message {
            text: text.to_string(),
            sender: Sender::User,
        });
        Some(PendingReply {
            contact: self.active.clone(),
            text: text.to_string(),
        })
    }

    /// Deliver a deferred reply. Returns the appended bot message, or `None`
    /// when the conversation the reply belonged to has been switched away
    /// under at-send attribution.
    pub fn deliver(&mut self, pending: &PendingReply) -> Option<Message> {
        let contact = match self.attribution {
            ReplyAttribution::AtFire => self.active.as_str(),
            ReplyAttribution::AtSend => {
                if pending.contact != self.active {
                    log::debug!(
                        "dropping reply for {}: view switched to {}",
                        pending.contact,
                        self.active
                    );
                    return None;
                }
                pending.contact.as_str()
            }
        };
        let message = Message {
            text: scripted_reply(contact, &pending.text),
            sender: Sender::Bot,
        };
        self.messages.push(message.clone());
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_default_contact_with_empty_view() {
        let session = ChatSession::new("Alice", ReplyAttribution::AtSend);
        assert_eq!(session.active_contact(), "Alice");
        assert!(session.messages().is_empty());
    }

    #[test]
    fn selecting_contact_clears_messages() {
        let mut session = ChatSession::new("Alice", ReplyAttribution::AtSend);
        session.submit("hello");
        session.select_contact("Bob");
        assert_eq!(session.active_contact(), "Bob");
        assert!(session.messages().is_empty());
    }

    #[test]
    fn whitespace_input_is_ignored() {
        let mut session = ChatSession::new("Alice", ReplyAttribution::AtSend);
        assert!(session.submit("").is_none());
        assert!(session.submit("   \t").is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn submit_appends_user_message_and_captures_reply() {
        let mut session = ChatSession::new("Bob", ReplyAttribution::AtSend);
        let pending = session.submit("hi").expect("non-empty input");
        assert_eq!(
            pending,
            PendingReply {
                contact: "Bob".into(),
                text: "hi".into(),
            }
        );
        assert_eq!(
            session.messages(),
            [Message {
                text: "hi".into(),
                sender: Sender::User,
            }]
        );
    }

    #[test]
    fn input_is_trimmed_before_append() {
        let mut session = ChatSession::new("Bob", ReplyAttribution::AtSend);
        let pending = session.submit("  hi  ").expect("non-empty input");
        assert_eq!(pending.text, "hi");
        assert_eq!(session.messages()[0].text, "hi");
    }

    #[test]
    fn delivery_appends_scripted_reply() {
        let mut session = ChatSession::new("Bob", ReplyAttribution::AtSend);
        let pending = session.submit("hi").expect("non-empty input");
        let reply = session.deliver(&pending).expect("contact still active");
        assert_eq!(reply.text, "Reply from Bob: hi");
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn at_send_reply_is_dropped_after_contact_switch() {
        let mut session = ChatSession::new("Bob", ReplyAttribution::AtSend);
        let pending = session.submit("hi").expect("non-empty input");
        session.select_contact("Carol");
        assert!(session.deliver(&pending).is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn at_fire_reply_names_the_new_contact() {
        let mut session = ChatSession::new("Bob", ReplyAttribution::AtFire);
        let pending = session.submit("hi").expect("non-empty input");
        session.select_contact("Carol");
        let reply = session.deliver(&pending).expect("always delivered");
        assert_eq!(reply.text, "Reply from Carol: hi");
        assert_eq!(session.messages(), [reply]);
    }

    #[test]
    fn rapid_sends_deliver_independent_replies() {
        let mut session = ChatSession::new("Alice", ReplyAttribution::AtSend);
        let first = session.submit("one").expect("non-empty input");
        let second = session.submit("two").expect("non-empty input");
        session.deliver(&first).expect("contact still active");
        session.deliver(&second).expect("contact still active");
        let texts: Vec<&str> = session.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            ["one", "two", "Reply from Alice: one", "Reply from Alice: two"]
        );
    }
}
