//! Platform FAQ: general training data, feature walkthroughs, general knowledge.

pub(super) const TRAINING: &[(&str, &str)] = &[
    (
        "what is hacknhost",
        "HacknHost is a platform for organizing and joining hackathons and tech events. \
Organizers can create events, manage registrations, and post jobs, courses and resources, \
while participants can discover events, form teams, submit projects and write blogs.",
    ),
    (
        "what is a hackathon",
        "A hackathon is a time-boxed event where participants team up to design and build a \
working prototype, usually over 24 to 48 hours, and then present it to a panel of judges.",
    ),
    (
        "how do i register for a hackathon",
        "Open the event page from the Events section and click \"Register\". Fill in the \
registration form; once the organizers approve your request you will see the event under \
\"My Events\" on your dashboard.",
    ),
    (
        "how do i create an event",
        "Go to your dashboard and choose \"Create Event\". Add the title, description, dates, \
venue or online link, prizes and registration deadline, then publish. You can edit the event \
at any time before it starts.",
    ),
    (
        "how are registrations approved",
        "Organizers review each registration from the event's \"Registrations\" tab and can \
approve or reject it. Participants get a notification as soon as their status changes.",
    ),
    (
        "can i participate solo",
        "Yes, most hackathons allow solo participants. Check the event rules for the minimum \
and maximum team size set by the organizers.",
    ),
    (
        "how many members can a team have",
        "Team size is decided by each event's organizers, usually between 2 and 4 members. \
You will find the limit on the event page under \"Rules\".",
    ),
    (
        "how do i form a team",
        "After registering, open the event and go to \"Teams\". You can create a team and \
invite members by username or email, or browse open teams and request to join one.",
    ),
    (
        "how do i submit my project",
        "Open the event, go to \"Submissions\" and click \"Submit Project\". Add your project \
title, description, repository link and demo video before the submission deadline.",
    ),
    (
        "how are projects judged",
        "Judges score each submission against the event's published criteria, typically \
innovation, technical complexity, design, and impact. Scores are combined to rank the \
projects and pick the winners.",
    ),
    (
        "when are the results announced",
        "Results are announced by the organizers after judging closes, usually at the closing \
ceremony. Winners are also listed on the event page.",
    ),
    (
        "can i edit my submission after the deadline",
        "No. Submissions are locked once the deadline passes. You can edit your project as many \
times as you like before then.",
    ),
];

pub(super) const FEATURES: &[(&str, &str)] = &[
    (
        "how do i post a job",
        "Organizers and sponsors can post jobs from the \"Jobs\" section. Click \"Post a Job\", \
add the role, company, location and application link, then publish it.",
    ),
    (
        "where can i find jobs",
        "Open the \"Jobs\" section from the navigation bar to browse openings shared by \
sponsors and partner companies.",
    ),
    (
        "how do i add a course",
        "Go to \"Courses\" and click \"Add Course\". Provide the title, description, level and \
a link to the material, then save it to make it visible to the community.",
    ),
    (
        "where can i find learning resources",
        "The \"Resources\" section collects tutorials, starter kits and API guides shared by \
organizers and mentors. You can filter them by topic.",
    ),
    (
        "how do i write a blog",
        "Open \"Blogs\" and click \"Write a Blog\". Use the editor to add your title, cover \
image and content, then publish it or save it as a draft.",
    ),
    (
        "can i edit my blog post",
        "Yes. Open the post from \"My Blogs\" and click \"Edit\". Changes go live as soon as \
you save them.",
    ),
    (
        "how does voice navigation work",
        "Click the microphone button and say a command such as \"go to events\" or \"open \
jobs\". Voice navigation needs a browser with speech recognition support and microphone \
permission.",
    ),
    (
        "what can the chatbot do",
        "I can answer questions about events, hackathons, registration, teams, submissions, \
judging, your account, pricing, and common technical problems on HacknHost.",
    ),
    (
        "how do i see my registered events",
        "Your registered events are listed under \"My Events\" on the dashboard, together with \
their approval status.",
    ),
];

pub(super) const GENERAL_KNOWLEDGE: &[(&str, &str)] = &[
    (
        "what should i bring to a hackathon",
        "Bring your laptop and charger, any hardware you plan to use, a valid ID for in-person \
venues, and something comfortable to rest in if the event runs overnight.",
    ),
    (
        "do i need to know how to code",
        "Not necessarily. Teams need designers, product thinkers and presenters too. Many \
events also run beginner workshops before hacking starts.",
    ),
    (
        "what is a demo day",
        "Demo day is when teams present their projects to judges and the audience, usually \
with a short live demo followed by questions.",
    ),
    (
        "what is a mentor",
        "Mentors are experienced engineers, designers or founders who help teams during the \
event with technical advice, feedback and direction.",
    ),
    (
        "tips for winning a hackathon",
        "Pick a focused problem, build a working demo early, keep the scope small, and practise \
your pitch. Judges reward a clear story and a demo that works.",
    ),
    (
        "what is an online hackathon",
        "An online hackathon runs fully remotely. Teams collaborate through chat and video \
calls, and submissions and judging happen on the platform.",
    ),
];
