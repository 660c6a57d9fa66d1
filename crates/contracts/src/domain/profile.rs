//! Fixed biographical content and outbound contact endpoints.
//!
//! Everything here is hand-authored display data. The contact endpoints are
//! static links, never computed.

pub const DISPLAY_NAME: &str = "Jeff Yuen";
pub const TAGLINE: &str = "Early-Stage Enthusiast";

pub const PHONE: &str = "734-678-7768";
pub const EMAIL: &str = "jeffchengyuen@gmail.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jcyuen/";

pub const PROFILE_IMAGE_URL: &str = "https://i.imgur.com/rXgLMhH.jpeg";
pub const PROFILE_IMAGE_CAPTION: &str =
    "Me simultaneously in the weeds while seeing the forest for the trees";

pub const ABOUT_KICKER: &str = "About Me";
pub const ABOUT_HEADING: &str = "Hello \u{1F44B} - I'm Jeff";

pub const ABOUT_PARAGRAPHS: [&str; 6] = [
    "I am an early-stage builder, equally energized and experienced in \
     building up 0 \u{2192} 1 systems across GTM, Product, FP&A, and Ops.",
    "I love rolling up my sleeves and partnering hand-in-hand with Founders \
     to build the first versions of what eventually scales.",
    "I operate best in high-velocity, high-stakes, high-ambiguity, and \
     high-trust environments. I hope this portfolio helps show my working \
     style and output.",
    "I am passionate about healthcare and tech and get excited about \
     building a healthcare system that truly benefits from AI.",
    "Disclaimer: had a blast using AI tools to build this site, however all \
     the content is in my own voice.",
    "Let's Dig In!",
];

pub const EVERYTHING_ELSE_TAGLINE: &str =
    "For when there's no owner and there's a chance for me to step up.";

/// Label/body pairs for the "Everything Else" bullets.
pub const EVERYTHING_ELSE_ITEMS: [(&str, &str); 3] = [
    (
        "People:",
        "Supported recruiting via sourcing, conducting case studies, and \
         closing candidates. Led onboarding processes post-hire.",
    ),
    (
        "Compliance:",
        "Led company efforts in becoming HIPAA and SOC 2 Type II compliant \
         and passing rigorous health plan audits.",
    ),
    (
        "Procurement:",
        "Owned procurement processes for Contractors and Tools from \
         sourcing, selection, contracting, and ROI oversight.",
    ),
];

/// File name of the résumé asset, also used as the download file name.
pub const RESUME_FILE_NAME: &str = "Jeff_Yuen_Resume.pdf";
