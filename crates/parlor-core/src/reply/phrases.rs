//! Fixed reply phrase tables.

pub const GREETING: &str = "Hello! How can I assist you today?";

pub const FAREWELL: &str = "Goodbye! Have a great day!";

pub const QUESTION_ACKS: [&str; 4] = [
    "That's a great question. Let me help you with that.",
    "I'll do my best to answer your question.",
    "Interesting question! Here's what I think...",
    "Let me provide some insights on that.",
];

pub const GENERIC_ACKS: [&str; 15] = [
    "That's an interesting point. Tell me more about it.",
    "I understand what you're saying. How does that make you feel?",
    "Could you elaborate on that thought?",
    "That's a great observation. What led you to that conclusion?",
    "I see. Have you considered other perspectives on this?",
    "Interesting! What would be the ideal outcome for you?",
    "Thank you for sharing that. What aspects are most important to you?",
    "That makes sense. How long have you been thinking about this?",
    "I appreciate your input. What challenges do you foresee?",
    "Good question! Let me think about that for a moment.",
    "Your message has been received and processed successfully.",
    "That's worth exploring further. What specific areas interest you most?",
    "I'm processing your request. Could you provide more context?",
    "Understood. What would you like to focus on next?",
    "Thanks for that information. How can I assist you further?",
];
