/// Scripted echo reply for a user message addressed to `contact`.
pub fn scripted_reply(contact: &str, text: &str) -> String {
    format!("Reply from {}: {}", contact, text)
}
