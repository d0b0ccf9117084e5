// Seed content the process starts with. A restart resets every mutation back
// to these values; there is no persistence layer behind the store.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::project::application::domain::entities::Project;
use crate::site::application::domain::entities::OperatorProfile;
use crate::skill::application::domain::entities::{Skill, SkillCategory};

pub fn initial_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Quantum Dashboard".to_string(),
            description:
                "A real-time data visualization platform for high-frequency trading analytics."
                    .to_string(),
            full_description: "Quantum Dashboard is a cutting-edge analytics tool designed for \
                institutional traders. It processes millions of data points per second to provide \
                sub-millisecond visualizations of market trends."
                .to_string(),
            challenges: vec![
                "Rendering high-frequency data without dropping frames".to_string(),
                "Implementing complex SVG-based chart interactions".to_string(),
                "Optimizing React re-renders for deep data structures".to_string(),
            ],
            solution: "Used specialized D3.js layers with React refs to bypass the virtual DOM \
                for heavy rendering, combined with Web Workers for data processing."
                .to_string(),
            tags: vec![
                "React".to_string(),
                "D3.js".to_string(),
                "Tailwind".to_string(),
                "WebWorkers".to_string(),
            ],
            image: "https://images.unsplash.com/photo-1551288049-bbda38a5f452?auto=format&fit=crop&q=80&w=800&h=450".to_string(),
            live_link: "https://github.com/google".to_string(),
            source_link: "https://github.com/google".to_string(),
        },
        Project {
            id: "2".to_string(),
            title: "Neon Commerce".to_string(),
            description:
                "High-performance headless e-commerce experience with futuristic UI components."
                    .to_string(),
            full_description: "Neon Commerce redefines the online shopping experience with a \
                focus on speed and immersive UI. It leverages a headless architecture for maximum \
                flexibility."
                .to_string(),
            challenges: vec![
                "Building a custom 3D product viewer".to_string(),
                "Ensuring 100/100 Lighthouse performance scores".to_string(),
                "Seamless multi-region state management".to_string(),
            ],
            solution: "Architected with Next.js App Router and used Three.js for interactive \
                product visualizations, resulting in a 40% increase in user engagement."
                .to_string(),
            tags: vec![
                "Next.js".to_string(),
                "TypeScript".to_string(),
                "Three.js".to_string(),
                "Stripe".to_string(),
            ],
            image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&q=80&w=800&h=450".to_string(),
            live_link: "https://example.com/neon-commerce".to_string(),
            source_link: "https://github.com/facebook/react".to_string(),
        },
        Project {
            id: "3".to_string(),
            title: "Neural Portfolio".to_string(),
            description:
                "A generative AI-integrated personal site showing the future of web interaction."
                    .to_string(),
            full_description: "This very portfolio explores how Large Language Models can act as \
                a bridge between developers and potential clients, providing a personalized \
                interactive experience."
                .to_string(),
            challenges: vec![
                "Integrating Google Gemini API securely".to_string(),
                "Designing a \"cyberpunk-minimalist\" design system".to_string(),
                "Handling real-time streaming AI responses".to_string(),
            ],
            solution: "Implemented a custom hook for the Gemini SDK and designed a \
                glassmorphism-heavy UI using Tailwind CSS custom configurations."
                .to_string(),
            tags: vec![
                "Gemini API".to_string(),
                "React".to_string(),
                "Tailwind".to_string(),
                "Framermotion".to_string(),
            ],
            image: "https://images.unsplash.com/photo-1639322537228-f710d846310a?auto=format&fit=crop&q=80&w=800&h=450".to_string(),
            live_link: "https://ai.google.dev/".to_string(),
            source_link: "https://github.com/google-gemini".to_string(),
        },
    ]
}

pub fn initial_skills() -> Vec<Skill> {
    vec![
        Skill {
            name: "React".to_string(),
            level: 95,
            category: SkillCategory::Frontend,
        },
        Skill {
            name: "TypeScript".to_string(),
            level: 90,
            category: SkillCategory::Frontend,
        },
        Skill {
            name: "JavaScript".to_string(),
            level: 98,
            category: SkillCategory::Language,
        },
        Skill {
            name: "HTML/CSS".to_string(),
            level: 100,
            category: SkillCategory::Language,
        },
        Skill {
            name: "Tailwind CSS".to_string(),
            level: 95,
            category: SkillCategory::Tool,
        },
        Skill {
            name: "Git/GitHub".to_string(),
            level: 85,
            category: SkillCategory::Tool,
        },
        Skill {
            name: "Gemini API".to_string(),
            level: 80,
            category: SkillCategory::Tool,
        },
    ]
}

pub fn initial_bio() -> String {
    "Usman is a world-class Senior Frontend Engineer specialized in building high-performance, \
     futuristic user interfaces. With deep expertise in React, TypeScript, and modern styling \
     frameworks like Tailwind CSS, he bridges the gap between complex backend data and elegant \
     human interaction. He has a passion for AI integration and creative coding."
        .to_string()
}

pub fn initial_assistant_instruction() -> String {
    "You are Usman's neural proxy, an assistant embedded in his portfolio site. Answer questions \
     about his projects, skills and experience, stay concise, and keep the slightly futuristic \
     tone of the site. If asked about contact, point visitors to the contact form."
        .to_string()
}

pub fn initial_social_links() -> BTreeMap<String, String> {
    let mut links = BTreeMap::new();
    links.insert("github".to_string(), "https://github.com".to_string());
    links.insert("linkedin".to_string(), "https://linkedin.com".to_string());
    links.insert("twitter".to_string(), "https://twitter.com".to_string());
    links
}

pub fn initial_profile() -> OperatorProfile {
    OperatorProfile {
        user: "Usman".to_string(),
        role: "Root Architect".to_string(),
        avatar: "https://avatars.githubusercontent.com/u/0?v=4".to_string(),
        last_login: Utc::now(),
    }
}
