/// Languages and frameworks.
pub const SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "TypeScript",
    "Kotlin",
    "C++",
    "C#",
    "PHP",
    "SQL",
    "React.js",
    "Next.js",
    "Node.js",
    "Tailwind CSS",
    "LangChain",
    "PyTorch",
    "Hugging Face",
    "Solana",
    "Ethereum",
    "Web3.js",
    "Solidity",
];

/// Day-to-day tooling.
pub const TOOLS: &[&str] = &[
    "Git",
    "GitHub Actions",
    "Docker",
    "VS Code",
    "Supabase",
    "Pinata",
    "IPFS",
    "GroqCloud",
    "Replicate",
    "D3.js",
    "Three.js",
];

/// Collaboration channels listed on the contact page.
pub const COLLABORATION: &[&str] = &[
    "Notion", "Discord", "Linear", "GitHub", "LinkedIn", "X", "YouTube",
];

/// Hackathon results and course awards.
pub const AWARDS: &[&str] = &[
    "Best AI App – Solana Swinburne Hackathon 2025 (VOID)",
    "Solana Colosseum Breakout Hackathon 2025 Participant (N.OVA)",
    "NASA Space Apps Challenge 2025 Participant (ClimaLens)",
    "Best Performance – Computing Technology Innovative Project (Flipside)",
    "Best Performance – Big Data Architecture and Application",
];

/// Availability note on the contact page.
pub const AVAILABILITY: &str = "Currently available for new projects and collaborations. Open to AI/ML development, Web3 applications, and full-stack solutions. Available from immediately.";

/// Contact phone number.
pub const PHONE: &str = "+84 931 549 083";

/// Profile page quote.
pub const QUOTE: [&str; 3] = [
    "Unforgettable impact and emotion",
    "Touching in the heart,",
    "Like a blue flame igniting.",
];

/// Running strip on the profile page.
pub const PROFILE_MARQUEE: &str = "AI ENGINEER AND WEB DEVELOPER •";

/// Join a list with the `" / "` separator used on the site.
pub fn slash_list(items: &[&str]) -> String {
    items.join(" / ")
}

#[cfg(test)]
#[path = "../../tests/unit/content/about.rs"]
mod tests;
