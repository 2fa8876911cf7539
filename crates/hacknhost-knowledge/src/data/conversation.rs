//! Conversational entries: greetings, farewells, help and support.

pub(super) const GREETINGS: &[(&str, &str)] = &[
    ("hi", "Hi there! 👋 How can I help you with HacknHost today?"),
    ("hello", "Hello! 👋 Ask me anything about events, teams, submissions or your account."),
    ("hey", "Hey! 👋 What can I help you with?"),
    ("good morning", "Good morning! ☀️ How can I help you today?"),
    ("good afternoon", "Good afternoon! How can I help you today?"),
    ("good evening", "Good evening! How can I help you today?"),
    (
        "how are you",
        "I'm doing great, thanks for asking! How can I help you with HacknHost?",
    ),
    (
        "who are you",
        "I'm the HacknHost assistant. I answer questions about events, hackathons, teams, \
submissions, judging and your account.",
    ),
];

pub(super) const FAREWELLS: &[(&str, &str)] = &[
    ("bye", "Goodbye! 👋 Good luck with your hackathon!"),
    ("goodbye", "Goodbye! Come back anytime you have questions."),
    ("see you", "See you soon! Happy hacking! 🚀"),
    ("thanks", "You're welcome! Let me know if there's anything else."),
    ("thank you", "You're welcome! Happy hacking! 🚀"),
    ("good night", "Good night! Rest up before the next hack session. 🌙"),
];

pub(super) const SUPPORT: &[(&str, &str)] = &[
    (
        "how do i contact support",
        "You can reach the HacknHost support team at support@hacknhost.com. For questions about \
a specific event, contact its organizers from the event page.",
    ),
    (
        "how do i contact the organizers",
        "Open the event page and use the \"Contact Organizers\" button. Organizers usually \
answer within a day.",
    ),
    (
        "how do i report a problem",
        "Use the \"Report a Problem\" link in the footer, or email support@hacknhost.com with a \
description and screenshots if possible.",
    ),
    (
        "how do i report a user",
        "Open the user's profile, click the menu and choose \"Report\". Our moderators review \
every report.",
    ),
    (
        "where can i find the faq",
        "The FAQ is linked in the footer of every page. You can also keep asking me here!",
    ),
    (
        "i need help",
        "Sure, I'm here to help! Tell me what you're trying to do, for example registering for \
an event, forming a team, or submitting your project.",
    ),
];
