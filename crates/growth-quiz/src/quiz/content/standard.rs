use super::{CharacterProfile, ResultContent};
use crate::quiz::domain::{Category, Question, QuizOption};

use crate::quiz::domain::Category::{Explorer, Reflective, SelfStarter, TurningPoint};

fn question(id: u32, prompt: &str, options: [(&str, Category, u32); 4]) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options
            .into_iter()
            .map(|(text, category, weight)| QuizOption {
                text: text.to_string(),
                category,
                weight,
            })
            .collect(),
    }
}

pub(super) fn questions() -> Vec<Question> {
    vec![
        question(
            1,
            "A new club is starting at school. What do you do?",
            [
                ("Sign up on the first day and offer to help run it", SelfStarter, 3),
                ("Join once a friend invites you along", TurningPoint, 2),
                ("Look into what the club actually does before deciding", Explorer, 2),
                ("Think about whether it fits what you want right now", Reflective, 2),
            ],
        ),
        question(
            2,
            "When did you grow the most in the past year?",
            [
                ("When I set a goal myself and chased it", SelfStarter, 2),
                ("When something unexpected changed my plans", TurningPoint, 3),
                ("When I dug deep into a topic I loved", Explorer, 2),
                ("When I took time to look back on how I felt", Reflective, 2),
            ],
        ),
        question(
            3,
            "Your team project stalls. What is your first move?",
            [
                ("Propose a plan and get everyone moving", SelfStarter, 2),
                ("Ask the others how they are feeling about it", TurningPoint, 2),
                ("Research what similar projects did", Explorer, 2),
                ("Step back and figure out why it stalled", Reflective, 2),
            ],
        ),
        question(
            4,
            "Which compliment would make you happiest?",
            [
                ("\"You made it happen.\"", SelfStarter, 2),
                ("\"You changed so much since we met.\"", TurningPoint, 2),
                ("\"You really know your stuff.\"", Explorer, 2),
                ("\"You understand yourself well.\"", Reflective, 2),
            ],
        ),
        question(
            5,
            "You have a free weekend with no plans.",
            [
                ("Start something I have wanted to try", SelfStarter, 2),
                ("Say yes to whatever my friends suggest", TurningPoint, 2),
                ("Read, tinker, or watch documentaries", Explorer, 3),
                ("Journal, draw, or go for a quiet walk", Reflective, 2),
            ],
        ),
        question(
            6,
            "How do you usually pick up a new skill?",
            [
                ("Jump in and learn by doing", SelfStarter, 2),
                ("Learn it because a situation demands it", TurningPoint, 2),
                ("Study the basics thoroughly first", Explorer, 2),
                ("Practice alone until it feels like mine", Reflective, 2),
            ],
        ),
        question(
            7,
            "A plan you cared about falls through.",
            [
                ("Set up a new plan right away", SelfStarter, 2),
                ("Treat it as a chance to try a different path", TurningPoint, 3),
                ("Analyse what went wrong", Explorer, 1),
                ("Give myself time to process the feeling", Reflective, 2),
            ],
        ),
        question(
            8,
            "What kind of internship sounds best?",
            [
                ("One where I can launch my own project", SelfStarter, 3),
                ("One in a completely unfamiliar field", TurningPoint, 2),
                ("One with a specialist I can learn from", Explorer, 2),
                ("One that helps me find what I really want", Reflective, 2),
            ],
        ),
        question(
            9,
            "Which phrase sounds most like you?",
            [
                ("\"You won't know until you try!\"", SelfStarter, 2),
                ("\"I can do it because we are together.\"", TurningPoint, 2),
                ("\"Why? I want to know more!\"", Explorer, 2),
                ("\"I want to listen to my inner voice.\"", Reflective, 3),
            ],
        ),
        question(
            10,
            "Looking ahead, what matters most to you?",
            [
                ("Taking on bigger challenges", SelfStarter, 2),
                ("Meeting people who change me", TurningPoint, 2),
                ("Becoming an expert in something", Explorer, 2),
                ("Living in a way that feels true to me", Reflective, 2),
            ],
        ),
    ]
}

fn jobs(list: &[&str]) -> Vec<String> {
    list.iter().map(|job| job.to_string()).collect()
}

pub(super) fn results() -> Vec<ResultContent> {
    vec![
        ResultContent {
            key: SelfStarter.key().to_string(),
            display_name: Some("Challenger".to_string()),
            title: "The self-starter who grows by acting first".to_string(),
            body: "You grow fastest when you set your own goals and move toward them.".to_string(),
            detail: "You learn by doing. Trying, failing and trying again is how you get better, and your energy pulls the people around you forward.".to_string(),
            usage: "Volunteer to lead a project or start an initiative of your own, then share what you learn along the way.".to_string(),
            student: "Your drive is a strength. Remember to pause now and then so the people following you can catch up.".to_string(),
            experience_tips: Some("During an internship, ask for ownership of one small deliverable early on.".to_string()),
            jobs: jobs(&["Entrepreneur", "Product manager", "Event producer"]),
            jobs_detail: Some("Roles where you can turn ideas into action and lead a team suit you well.".to_string()),
        },
        ResultContent {
            key: TurningPoint.key().to_string(),
            display_name: Some("Empathizer".to_string()),
            title: "The turning-point type who grows through encounters".to_string(),
            body: "New people and unexpected events are what spark your growth.".to_string(),
            detail: "Change does not scare you for long. You adapt, you connect, and each encounter leaves you a little different than before.".to_string(),
            usage: "Put yourself in unfamiliar settings: mixed teams, exchanges and events where you meet people outside your circle.".to_string(),
            student: "Your openness to change is rare. Keep a note of each turning point so you can see how far you have come.".to_string(),
            experience_tips: Some("Rotate through different teams if the internship allows it.".to_string()),
            jobs: jobs(&["Community manager", "Counselor", "Sales"]),
            jobs_detail: Some("Work built around people and relationships lets your adaptability shine.".to_string()),
        },
        ResultContent {
            key: Explorer.key().to_string(),
            display_name: Some("Thinker".to_string()),
            title: "The explorer who grows by digging deep".to_string(),
            body: "Curiosity drives you. You grow by investigating until things make sense.".to_string(),
            detail: "When something catches your interest you follow it all the way down. You prefer to understand before you act, and that depth becomes expertise.".to_string(),
            usage: "Pick a research theme and go deep; present what you find so others benefit from it.".to_string(),
            student: "Your focus is powerful. Share your findings early, even when they feel unfinished.".to_string(),
            experience_tips: None,
            jobs: jobs(&["Researcher", "Engineer", "Data analyst"]),
            jobs_detail: Some("Roles that reward careful analysis and deep knowledge fit you best.".to_string()),
        },
        ResultContent {
            key: Reflective.key().to_string(),
            display_name: Some("Dreamer".to_string()),
            title: "The reflective type who grows by looking inward".to_string(),
            body: "You grow by listening to your own feelings and turning them into expression.".to_string(),
            detail: "Quiet time is where your ideas take shape. You notice subtle feelings, yours and others', and you express them with care.".to_string(),
            usage: "Keep a journal or creative log, and make space for projects where you can express your own point of view.".to_string(),
            student: "Your sensitivity is a gift. Trust it, and let others see the work it produces.".to_string(),
            experience_tips: Some("Schedule a short reflection at the end of each internship week.".to_string()),
            jobs: jobs(&["Designer", "Writer", "Illustrator"]),
            jobs_detail: Some(
                "Creative work where your perspective matters will feel most natural.".to_string(),
            ),
        },
        ResultContent {
            key: format!("{}・{}", SelfStarter.key(), Explorer.key()),
            display_name: Some("Pioneer".to_string()),
            title: "The pioneer who acts and investigates in equal measure".to_string(),
            body: "You move quickly, but you also want to understand why things work.".to_string(),
            detail: "You combine initiative with curiosity: you launch experiments and then study the results closely.".to_string(),
            usage: "Run small experiments, measure what happens and iterate.".to_string(),
            student: "You have both the engine and the map. Use them together.".to_string(),
            experience_tips: None,
            jobs: jobs(&["Startup engineer", "UX researcher"]),
            jobs_detail: None,
        },
        ResultContent {
            key: format!("{}・{}", TurningPoint.key(), Reflective.key()),
            display_name: Some("Storyteller".to_string()),
            title: "The storyteller who turns encounters into insight".to_string(),
            body: "You are changed by the people you meet, and you take the time to understand how.".to_string(),
            detail: "Encounters move you and reflection makes those moments last. You are good at finding meaning in change.".to_string(),
            usage: "After each new experience, write or talk through what it changed for you.".to_string(),
            student: "Your stories help others make sense of their own turning points.".to_string(),
            experience_tips: None,
            jobs: jobs(&["Editor", "Teacher", "Coach"]),
            jobs_detail: None,
        },
    ]
}

pub(super) fn characters() -> Vec<CharacterProfile> {
    vec![
        CharacterProfile {
            category: SelfStarter,
            name: "Act",
            nickname: "Challenger",
            emoji: "🔥",
            personality: "Proactive and full of energy",
            catchphrase: "You won't know until you try!",
            strengths: vec!["Leadership", "Execution", "Positive thinking", "Teamwork"],
            hobbies: vec!["Sports", "Event planning", "Exploring new places"],
        },
        CharacterProfile {
            category: TurningPoint,
            name: "Haruka",
            nickname: "Empathy",
            emoji: "🌊",
            personality: "Empathetic and enjoys change",
            catchphrase: "I can do it because we are together!",
            strengths: vec!["Empathy", "Adaptability", "Communication", "Cooperation"],
            hobbies: vec!["Time with friends", "Movies", "Cafe hopping", "Volunteering"],
        },
        CharacterProfile {
            category: Explorer,
            name: "Kent",
            nickname: "Thinker",
            emoji: "🔬",
            personality: "Endlessly curious investigator",
            catchphrase: "Why? I want to know more!",
            strengths: vec!["Analysis", "Focus", "Logical thinking", "Persistence"],
            hobbies: vec!["Reading", "Experiments", "Puzzles", "Programming"],
        },
        CharacterProfile {
            category: Reflective,
            name: "Yume",
            nickname: "Dreamer",
            emoji: "🌙",
            personality: "Sensitive with an artist's temperament",
            catchphrase: "I want to listen to my inner voice.",
            strengths: vec!["Sensitivity", "Expression", "Creativity", "Empathy"],
            hobbies: vec!["Art", "Music", "Poetry and fiction", "Nature walks"],
        },
    ]
}
