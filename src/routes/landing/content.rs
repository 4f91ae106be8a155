//! Marketing copy. Plain data; the markup lives in `fragments`.

pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Step {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Quote {
    pub name: &'static str,
    pub text: &'static str,
}

pub struct Faq {
    pub q: &'static str,
    pub a: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Steady, crash‑free energy",
        desc: "Transdermal caffeine + L‑theanine for smooth clarity.",
    },
    Feature {
        title: "On/Off control",
        desc: "Peel on to start focus, peel off to stop — your timeline.",
    },
    Feature {
        title: "Up to 8 hours",
        desc: "Designed for deep work sessions, meetings, and builds.",
    },
    Feature {
        title: "Invisible ritual",
        desc: "No mugs, no cans — just discipline you can wear.",
    },
];

// numbered in order of appearance
pub const STEPS: [Step; 3] = [
    Step {
        title: "Peel & place",
        desc: "Apply to clean, dry skin (upper arm/shoulder).",
    },
    Step {
        title: "Set your session",
        desc: "Clarity begins in minutes and lasts up to 8 hours.",
    },
    Step {
        title: "Peel to stop",
        desc: "Remove when you want to rest — you’re in control.",
    },
];

pub const BENEFITS: [Card; 3] = [
    Card {
        title: "Crash‑free clarity",
        body: "No more spike‑and‑crash rollercoaster. Just steady output.",
    },
    Card {
        title: "Calm, not jitters",
        body: "L‑theanine smooths stimulation so you think clearly.",
    },
    Card {
        title: "Fits your identity",
        body: "A modern ritual for people who take performance seriously.",
    },
];

pub const QUOTES: [Quote; 3] = [
    Quote {
        name: "Alex — Designer",
        text: "Coffee made me anxious. With VISIONARY, I get five hours of clean focus and still sleep.",
    },
    Quote {
        name: "Jamie — Founder",
        text: "It feels like discipline you can wear. No crash, just execution.",
    },
    Quote {
        name: "Ravi — Consultant",
        text: "My afternoons used to collapse. Now they’re my strongest hours.",
    },
];

pub const FAQS: [Faq; 5] = [
    Faq {
        q: "Does a patch really work?",
        a: "Transdermal delivery is widely used in medicine. VISIONARY meters caffeine steadily for smooth focus.",
    },
    Faq {
        q: "Will I feel jittery?",
        a: "The formula pairs caffeine with L‑theanine to keep energy calm and clear.",
    },
    Faq {
        q: "How long does it last?",
        a: "Up to 8 hours. You can remove the patch anytime to stop the session.",
    },
    Faq {
        q: "Is there a crash?",
        a: "The steady release avoids the spike‑and‑crash common with coffee and energy drinks.",
    },
    Faq {
        q: "Can I still drink coffee?",
        a: "Many users skip coffee. If you do combine, start low and assess tolerance.",
    },
];

pub const CONTACT_EMAIL: &str = "hello@visionary.example";
