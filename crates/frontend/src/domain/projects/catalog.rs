//! The hand-authored case study catalog.
//!
//! Populated once at startup and never mutated. Record ids double as the
//! lookup keys referenced by [`SECTIONS`].

use contracts::domain::{Anchor, ProjectDetails, ProjectRecord, SectionDef};
use once_cell::sync::Lazy;

/// Home-page sections in display order, each presenting two case studies.
pub const SECTIONS: [SectionDef; 5] = [
    SectionDef {
        anchor: Anchor::CeoOffice,
        heading: "Office of the CEO",
        project_ids: ["fundraising", "okrs"],
    },
    SectionDef {
        anchor: Anchor::Growth,
        heading: "Growth / GTM",
        project_ids: ["sales-enablement", "partnerships"],
    },
    SectionDef {
        anchor: Anchor::Product,
        heading: "Product",
        project_ids: ["prototyping", "adoption"],
    },
    SectionDef {
        anchor: Anchor::Fpa,
        heading: "FP&A",
        project_ids: ["financial-model", "cash-flow"],
    },
    SectionDef {
        anchor: Anchor::Ops,
        heading: "Launch & Ops",
        project_ids: ["onboarding", "service-line"],
    },
];

/// Find a case study by its stable id.
pub fn project_by_id(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|project| project.id == id)
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub static PROJECTS: Lazy<Vec<ProjectRecord>> = Lazy::new(|| {
    vec![
        ProjectRecord {
            id: "fundraising".into(),
            title: "Fundraising Ops".into(),
            subtitle: "Capital Strategy | Investor Relations".into(),
            image_url: Some("https://i.imgur.com/HUsQXv0.png".into()),
            image_caption: Some(
                "Central repository of artifacts and resources to support fundraising efforts"
                    .into(),
            ),
            description: "**Owned behind the scenes sausage making for fundraising efforts**, \
                          from investor pipelines, participating in pitches with VCs and \
                          alternative capital, creating decks and memos, and handling \
                          day-to-day asks, allowing Founder to stay focused on closing."
                .into(),
            details: ProjectDetails {
                tldr: "Managed end-to-end fundraising operations and due diligence, enabling \
                       the CEO to focus purely on investor relationships and closing."
                    .into(),
                context: lines(&[
                    "The company needed to raise a Series A in a tightening venture market.",
                    "The process required rigorous data preparation, narrative shaping, and \
                     rapid response to investor queries.",
                ]),
                inputs_tools: lines(&[
                    "Pitch Deck",
                    "Notion (Data Room)",
                    "Airtable (CRM)",
                    "Excel (Financial Models)",
                    "Carta",
                ]),
                outputs_outcome: lines(&[
                    "Successfully organized over 50+ investor conversations.",
                    "Maintained a comprehensive data room with 100+ documents.",
                    "Supported the closing of the round.",
                ]),
                next_iteration: lines(&[
                    "Implementing automated nurturing sequences for warm investor leads to \
                     maintain relationships between rounds.",
                ]),
            },
        },
        ProjectRecord {
            id: "okrs".into(),
            title: "End-to-End OKRs".into(),
            subtitle: "CEO Agenda Translation | Org Alignment".into(),
            image_url: Some("https://i.imgur.com/LXmwL6T.png".into()),
            image_caption: Some("Company roadmap and source of truth for the year".into()),
            description: "**Built and launched startup's inaugural OKR process**, a crucial \
                          North Star for aligning a lean team against mission critical \
                          milestones. Instituted QBRs to track progress towards OKRs and to \
                          ask tough questions to collaboratively brainstorm ways to \
                          **course correct back to 'Green'**."
                .into(),
            details: ProjectDetails {
                tldr: "Built inaugural OKR and roadmapping exercise on mission critical \
                       milestones across the Company to drive alignment and accountability."
                    .into(),
                context: lines(&[
                    "Onboarding doesn't really exist at early stage.",
                    "Knew the best way to learn was to deeply understand what everyone was \
                     working on.",
                    "Synthesized conversations and created the roadmap along the way.",
                ]),
                inputs_tools: lines(&[
                    "Coffee chats and working sessions with team members, asking a lot of \
                     new-hire questions.",
                    "Google Sheets to capture roadmap.",
                    "Google Slide for QBRs.",
                ]),
                outputs_outcome: lines(&[
                    "Solidification of most mission critical OKRs to align entire org around.",
                    "Synthesized view of ongoing and planned work, status, OKR owner, and \
                     timeline.",
                    "Roadmap was basis for QBR discussions and have honest conversations for \
                     On Track or Off Track.",
                ]),
                next_iteration: lines(&[
                    "Deeper integration with project management tools (Jira/Linear) to link \
                     daily tasks directly to quarterly objectives.",
                    "Build in processes to revisit OKRs and if certain ones remain relevant \
                     (things can change daily in early-stage).",
                ]),
            },
        },
        ProjectRecord {
            id: "sales-enablement".into(),
            title: "Full-Funnel Sales Enablement".into(),
            subtitle: "ICP DEFINITION | SALES NARRATIVE".into(),
            image_url: Some("https://i.imgur.com/5d0klf9.png".into()),
            image_caption: Some("Product Overview as part of Proposal Decks".into()),
            description: "**Developed full portfolio of Sales artifacts** including enriched \
                          ICP lead lists, product overview decks, case studies, pricing / ROI \
                          calculators and standard contracts. **Walked the walk by driving \
                          sales from demo to close, helping close first Sales for SaaS \
                          business.**"
                .into(),
            details: ProjectDetails {
                tldr: "Built up the full-stack (Top Funnel \u{2014}> Bottom Funnel) of Sales \
                       Enablement Tools from scratch for our Product; walked the walk and \
                       used tools to close first Contracts."
                    .into(),
                context: lines(&[
                    "We needed to rapidly build up our GTM and Sales motion after we pivoted \
                     to make our internally developed tool commercially available as a SaaS \
                     product.",
                ]),
                inputs_tools: lines(&[
                    "Internal outcomes data and external benchmarking to build messaging.",
                    "Google Slides and Slides to build decks, one-pagers, and ROI calculators",
                    "GPT to build initial Contract templates",
                ]),
                outputs_outcome: lines(&[
                    "First B2B sales generated for SaaS business",
                    "Full-stack of collateral ready to move Prospects along funnel",
                ]),
                next_iteration: lines(&[
                    "Use AI to bring some of the collateral (e.g. proposals, ROI calculators) \
                     to life via various microsites",
                ]),
            },
        },
        ProjectRecord {
            id: "partnerships".into(),
            title: "Partnership Revenue Unlocks".into(),
            subtitle: "NEW REVENUE STREAMS | STRATEGIC PARTNERSHIPS".into(),
            image_url: Some("https://i.imgur.com/6Klsz0o.png".into()),
            image_caption: Some(
                "Trading terms with Strategic Partner to unlock new revenue".into(),
            ),
            description: "**Originated, sourced, and closed strategic partnerships to grow \
                          the business.** Led forecasting and scenario analysis efforts to \
                          optimize commercial terms for the contract. Immediately leveraged \
                          partnership to **unlock $1M+ of net new CARR.**"
                .into(),
            details: ProjectDetails {
                tldr: "Identified strategic revenue opportunity; traded terms and landed the \
                       partnership, unlocked $1.3M+ in net new contracted ARR with average \
                       time to close of 16 days."
                    .into(),
                context: lines(&[
                    "We recognized a huge potential for our ICPs to materially grow \
                     high-margin revenue by launching a new service line.",
                    "Unfortunately service line is gated unless provider holds a specific \
                     license.",
                    "Landed strategic partnership to sublicense, allowing us to blitz ICPs \
                     with our new offering.",
                ]),
                inputs_tools: lines(&[
                    "GPT to deep dive on CMS documentation and learn ins and outs of new \
                     program",
                    "Google Sheets to forecast revenue potential and scenario planning for \
                     key commercial terms",
                    "GPT to generate contract template and framework of key terms.",
                ]),
                outputs_outcome: lines(&[
                    "Landed partnerships that immediately became cash flow positive given \
                     power of license.",
                    "Closed ~$1.3M in net new CARR for 2026.",
                    "16 day average time to close.",
                ]),
                next_iteration: lines(&[
                    "While we needed to move fast, ideally would have opened procurement \
                     process further to have more optionality. Most ideal would have been \
                     able to directly obtain license from CMS.",
                ]),
            },
        },
        ProjectRecord {
            id: "prototyping".into(),
            title: "Rapid MVP Prototyping".into(),
            subtitle: "PRODUCT STRATEGY | VIBE-CODING".into(),
            image_url: Some("https://i.imgur.com/6MYdPYE.png".into()),
            image_caption: Some(
                "Vibe coding from idea to prototype in Lovable in ~48 hours.".into(),
            ),
            description: "**Vibe-coded earliest prototypes of SaaS platform** used to close \
                          propsective customers, fundraising pitches with Investors, and as \
                          sandbox for new features. **Translated MVP scaffolding into \
                          detailed PRDs to 3x Eng shipping speed.**"
                .into(),
            details: ProjectDetails {
                tldr: "Built out SaaS prototype used to close prospective customers and 3x \
                       Engineering speed of eventual MVP build."
                    .into(),
                context: lines(&[
                    "We turned our internal tool into a SaaS product and needed a prototype \
                     that would be 1) used in Sales / Fundraising efforts and 2) serve as a \
                     wireframe to pass to outsourced Eng team to develop.",
                ]),
                inputs_tools: lines(&[
                    "Figma to outline key pages and functionality.",
                    "Lovable to physically build out the pages and features.",
                    "GPT to transform code into detailed discrete PRDs for Eng.",
                ]),
                outputs_outcome: lines(&[
                    "Fully functional prototype Demo environment used to close first \
                     contracts.",
                    "Accelerated Eng shipping speed 3x by more easily visualizing \
                     requirements.",
                ]),
                next_iteration: lines(&[
                    "This was super successful so would have jumped to this sooner. With \
                     wealth of time, I would like to explore building this with Claude Code \
                     and build my more technical skillset.",
                ]),
            },
        },
        ProjectRecord {
            id: "adoption".into(),
            title: "Accelerating Product Adoption".into(),
            subtitle: "A/B TESTING | Cross-Functional Collaboration".into(),
            image_url: Some("https://i.imgur.com/W5iMZPA.png".into()),
            image_caption: Some(
                "Bingo style game to accelerate Product/Workflow adoption.".into(),
            ),
            description: "**Ideated and piloted novel gamification methods to help accelerate \
                          Provider onboarding** onto platform and integration in day-to-day \
                          workflows. Built initial prototypes and ran manual A/B experiments \
                          that showed **pilot was wildly successful and was eventually \
                          productized.**"
                .into(),
            details: ProjectDetails {
                tldr: "Felt conviction in new gamification method and manually built and \
                       piloted a new Product feature that accelerated Product adoption by 4x \
                       before ultimately being built as a core feature."
                    .into(),
                context: lines(&[
                    "Provider-facing Products only work if they are deeply entrenched in \
                     workflows but it was taking too long to get buy-in from Providers to \
                     use the Product, putting accounts at risk.",
                    "I ideated a Bingo-style board that sat on the Product homepage that \
                     helped users onboard onto Product by doing, going into each of the \
                     modules the Product had on offer.",
                ]),
                inputs_tools: lines(&[
                    "User research from provider groups on workflows and the value of the \
                     Product.",
                    "Gamification principles to develop fun and interactive ways to engage \
                     with the Product.",
                    "Looker to pull data and A/B test feature effectiveness.",
                ]),
                outputs_outcome: lines(&[
                    "Pilot accelerated Product adoption by 4x, measured by Product use \
                     within 7 days of onboarding.",
                    "Influenced Product roadmap as feature was eventually built in the \
                     Product.",
                    "Led to me building Ops playbooks for how to deploy the feature, \
                     becoming an onboarding SOP.",
                ]),
                next_iteration: lines(&[
                    "Manually building and testing this was a huge pain. With the power of \
                     AI, I would have definitely made a microsite to test the feature and \
                     monitor engagement in real time.",
                ]),
            },
        },
        ProjectRecord {
            id: "financial-model".into(),
            title: "Financial Forecast Model".into(),
            subtitle: "GROWTH LEVERS | UNIT ECONOMICS".into(),
            image_url: Some("https://i.imgur.com/pp0ylxR.png".into()),
            image_caption: Some(
                "Summary tab from forecast model outlining scale needed for at various \
                 revenue targets."
                    .into(),
            ),
            description: "**Built and owned financial modeling and forecasting** used for \
                          quarterly target setting and various financial due diligence as \
                          part of fundraising capital. Developed org understanding of unit \
                          economics and perspective on margin requirements, translating into \
                          pricing strategy and pipeline targets."
                .into(),
            details: ProjectDetails {
                tldr: "I architected, built, and maintained financial models used for \
                       Growth / Sales Target Setting, Financial Due Diligence, and hiring \
                       plans"
                    .into(),
                context: lines(&[
                    "We were evolving from a healthcare services business into a SaaS and \
                     provider enablement company and needed a financial model to guide the \
                     transition.",
                    "I took took ownership of the model as our outsourced CFO team had a \
                     traditional healthcare services background and weren't in the weeds \
                     enough to understand the financial storytelling.",
                ]),
                inputs_tools: lines(&[
                    "Hubspot for historical pipeline data.",
                    "Ramp and NetSuite for historical expense data.",
                    "GPT to translate financial model concepts and mechanics into formulas.",
                    "Sheets to put it all together.",
                ]),
                outputs_outcome: lines(&[
                    "Full 3 year forecast model outlining Revenue, COGs, Margin, Profit etc.",
                    "Specific builds for each product line and their respective ACVs, sales \
                     cycles, and economics; OpEx and headcount assumptions that scale with \
                     company.",
                    "Tangible goals for Growth team on qualified leads, demos, etc to meet \
                     Revenue goals.",
                ]),
                next_iteration: lines(&[
                    "Would want to explore more AI-native ERP systems as we were stuck in \
                     NetSuite. Depending on how much Finance is in my immediate scope, would \
                     want to explore more specific FP&A tools to automate more.",
                ]),
            },
        },
        ProjectRecord {
            id: "cash-flow".into(),
            title: "Cash Flow Modelling".into(),
            subtitle: "BURN MANAGEMENT | RUNWAY PLANNING".into(),
            image_url: Some("https://i.imgur.com/oe9cv06.png".into()),
            image_caption: Some("Daily cash balance model output".into()),
            description: "**Built and owned company cash flow model that informed overall \
                          company operations** (e.g. hiring, rev cycle, expense management). \
                          Provided CEO visibility for daily estimates of cash balance based \
                          on history company inflows (e.g. revenue + receivables) and \
                          outflows (e.g. payroll, vendor expenses, various debt vehicles)."
                .into(),
            details: ProjectDetails {
                tldr: "Cash is king and cash burn / runway management is critical to success \
                       so I built a daily cash flow and cash balance model, predicting cash \
                       balance with 90%-95% accuracy."
                    .into(),
                context: lines(&[
                    "Healthcare cash flow is extremely complex, with each service type and \
                     payer having their own policies and procedures on how they will pay and \
                     most importantly when.",
                    "With receivables routinely aging 90+ days, it was really important to \
                     understand cash implications of various decisions over timeTight \
                     runway required precise timing of payables and receivables.",
                ]),
                inputs_tools: lines(&[
                    "Claims reports and SaaS invoices to predict timing of revenue \u{2014}> \
                     cash.",
                    "Ramp to understand monthly OpEx and timing of outflows.",
                    "Payroll reports to understand fully-loaded payroll costs.",
                    "GPT to amortize debt schedules.",
                    "Sheets to put it all together.",
                ]),
                outputs_outcome: lines(&[
                    "Cash flow model that predicted cash balance on a daily (potentially \
                     overkill) basis with 90%-95% accuracy.",
                    "Deep dive of OpEx that allowed us to cut unneeded SaaS, manage \
                     Contractor spend, and inform hiring plans.",
                ]),
                next_iteration: lines(&[
                    "Build in more scenario planning for key inputs / assumptions (e.g. time \
                     to collect, revenue forecasts).",
                    "Use AI to build it into a more solid tool / microsite that allows \
                     broader leadership team to understand and adjust assumptions.",
                ]),
            },
        },
        ProjectRecord {
            id: "onboarding".into(),
            title: "Customer Onboarding Engine".into(),
            subtitle: "STANDARDIZATION | OPS SCALING".into(),
            image_url: Some("https://i.imgur.com/gDxSpsE.png".into()),
            image_caption: Some(
                "Notion board outlining implementation tickets and steps".into(),
            ),
            description: "Led the first onboardings for new customers before standardizing \
                          process to help **reduce onboarding time and human capital needed \
                          by ~30%.** Built initial onboarding ticketing system for new \
                          Customer across service lines, providing org with consolidated \
                          view of new Customer onboarding."
                .into(),
            details: ProjectDetails {
                tldr: "I built a standardized onboarding process for our services lines to \
                       improve efficiencies as we began to handle multiple concurrent \
                       onboardings."
                    .into(),
                context: lines(&[
                    "Growth meant that we were onboarding > 1 customer at any given time and \
                     needed to develop a more scalable process.",
                    "Built up a basic checklist for onboarding customers and a Notion \
                     onboarding ticketing system for our team.",
                ]),
                inputs_tools: lines(&[
                    "Sheets to develop data specs and share with Customers.",
                    "Google Drive to simplify, manage, and share data with Customers.",
                    "Notion to develop the onboarding ticket system.",
                ]),
                outputs_outcome: lines(&[
                    "Standardized onboarding process that reduced time to onboard by ~30%.",
                    "Accessible centralized database of all onboarding customers by status.",
                ]),
                next_iteration: lines(&[
                    "Our onboarding process was fairly light - for more robust processes I \
                     would look to use a more dedicated tool (e.g. Linear, Asana, etc.)",
                    "Building more automations to reduce human time spent even more (e.g. \
                     integrating and automating via Slack).",
                ]),
            },
        },
        ProjectRecord {
            id: "service-line".into(),
            title: "New Service Line Build".into(),
            subtitle: "REVENUE MAXIMIZATION | AUTOMATED REPORTING".into(),
            image_url: Some("https://i.imgur.com/9fGsM3d.png".into()),
            image_caption: Some("Automated reporting showing overall program health".into()),
            description: "Helped land payer contracts and build up new service line, built \
                          up processes to maximize revenue, **growing program to ~1M in \
                          annualized revenue in 10 months.**Designed automated dashboarding \
                          to help care teams optimize towards patient outcomes and maximize \
                          realization of contracted revenue."
                .into(),
            details: ProjectDetails {
                tldr: "I helped launch a new service line by closing first payer contracts, \
                       hiring the team, and optimizing operations to hit ~1M in annualized \
                       revenue in 10 months."
                    .into(),
                context: lines(&[
                    "To diversity revenue streams and unlock more revenue potential as a \
                     business, we launched a new service line focused on high-acuity \
                     Medicaid patients.",
                    "Helped build service line from 0 \u{2014}> 1 by landing first payer \
                     contracts, hiring on-the-ground teams, and managing data & reporting.",
                ]),
                inputs_tools: lines(&[
                    "Deep dive in economics of payer contracts (they can vary wildly) to \
                     develop strategies to maximize revenue.",
                    "EMR to export clinical and encounter data.",
                    "Sheets and Apps Scripts to build automated dashboards.",
                ]),
                outputs_outcome: lines(&[
                    "New service line scaled to ~1M in annualized revenue in 10 months.",
                    "Automated dashboard that is geared towards maximizing MRR (i.e., \
                     engagement targets, method of outreach, patient-facing time per \
                     patient).",
                ]),
                next_iteration: lines(&[
                    "Felt limitations from our EMR, would choose a more flexible and \
                     AI-native EMR that would let us control our data more.",
                    "Spending more time with on-the-ground team members (especially early \
                     hires) on the economics behind the programs for change management.",
                ]),
            },
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = PROJECTS.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_every_section_reference_resolves() {
        for section in SECTIONS {
            for id in section.project_ids {
                assert!(
                    project_by_id(id).is_some(),
                    "section '{}' references unknown project '{}'",
                    section.heading,
                    id
                );
            }
        }
    }

    #[test]
    fn test_every_project_is_presented_in_some_section() {
        let referenced: HashSet<&str> = SECTIONS
            .iter()
            .flat_map(|s| s.project_ids.iter().copied())
            .collect();
        for project in PROJECTS.iter() {
            assert!(
                referenced.contains(project.id.as_str()),
                "project '{}' is not referenced by any section",
                project.id
            );
        }
    }

    #[test]
    fn test_lookup_matches_record_key() {
        let record = project_by_id("cash-flow").expect("known id");
        assert_eq!(record.id, "cash-flow");
        assert!(project_by_id("not-in-catalog").is_none());
    }

    #[test]
    fn test_details_preserve_authored_order() {
        let record = project_by_id("financial-model").expect("known id");
        assert_eq!(record.details.inputs_tools[0], "Hubspot for historical pipeline data.");
        assert_eq!(
            record.details.inputs_tools.last().map(String::as_str),
            Some("Sheets to put it all together.")
        );
    }
}
