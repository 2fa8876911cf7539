//! Account and profile, pricing and billing, technical troubleshooting.

pub(super) const ACCOUNT: &[(&str, &str)] = &[
    (
        "how do i create an account",
        "Click \"Sign Up\" in the top right corner and register with your email or a social \
login. Verify your email address to activate the account.",
    ),
    (
        "how do i reset my password",
        "On the login page click \"Forgot password?\" and enter your email. We'll send you a \
link to choose a new password.",
    ),
    (
        "how do i update my profile",
        "Open your dashboard, click your avatar and choose \"Edit Profile\". You can update \
your name, bio, skills, social links and profile picture.",
    ),
    (
        "how do i change my email",
        "Go to \"Settings\" → \"Account\" and enter your new email address. We'll send a \
verification link to confirm the change.",
    ),
    (
        "how do i delete my account",
        "Go to \"Settings\" → \"Account\" and choose \"Delete Account\". This permanently \
removes your profile, registrations and blog posts.",
    ),
    (
        "why can't i log in",
        "Check that your email is verified and your password is correct. If it still fails, \
reset your password or contact support@hacknhost.com.",
    ),
    (
        "how do i become an organizer",
        "Any verified account can create events. Open your dashboard and choose \"Create \
Event\" to get organizer tools for that event.",
    ),
];

pub(super) const PRICING: &[(&str, &str)] = &[
    (
        "is hacknhost free",
        "Yes, joining and participating in events on HacknHost is free. Organizers can host \
community events for free as well.",
    ),
    (
        "do i have to pay to participate",
        "Participation is free on HacknHost. Some organizers may charge a ticket for \
in-person events; the price is shown on the event page.",
    ),
    (
        "how much does it cost to host an event",
        "Hosting community events is free. Premium features such as custom branding and \
advanced analytics are available on paid organizer plans.",
    ),
    (
        "how do i get a refund",
        "Refunds for paid event tickets are handled by the event organizers. Contact them from \
the event page, or email support@hacknhost.com if you don't get a response.",
    ),
    (
        "what payment methods are accepted",
        "We accept major credit and debit cards and UPI for paid plans and tickets.",
    ),
];

pub(super) const TECHNICAL: &[(&str, &str)] = &[
    (
        "the page is not loading",
        "Try refreshing the page, clearing your browser cache, or opening the site in a \
private window. If the problem continues, email support@hacknhost.com.",
    ),
    (
        "which browsers are supported",
        "HacknHost works best on the latest versions of Chrome, Firefox, Edge and Safari.",
    ),
    (
        "voice commands are not working",
        "Voice navigation needs speech recognition support, which is available in Chrome and \
Edge. Make sure the site has microphone permission and try again.",
    ),
    (
        "is there a mobile app",
        "There's no native app yet, but the website is fully responsive and works well in \
mobile browsers.",
    ),
    (
        "my submission upload failed",
        "Check that your file is within the size limit and your connection is stable, then \
retry. Linking to a hosted video or repository instead of uploading also works.",
    ),
    (
        "i found a bug",
        "Thanks for letting us know! Please report it through the \"Report a Problem\" link or \
email support@hacknhost.com with steps to reproduce it.",
    ),
];
