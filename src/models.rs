#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

// Captured at submit time and carried to the deferred reply callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub contact: String,
    pub text: String,
}
