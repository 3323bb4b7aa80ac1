//! DietitianLab - consultation practice for dietitians in training.

use crate::types::*;

const STUDENT: Audience = Audience {
    key: "student",
    label: "Students",
    accent: Accent::Blue,
    signup_role: None,
};

const EDUCATOR: Audience = Audience {
    key: "educator",
    label: "Educators",
    accent: Accent::Teal,
    signup_role: Some("educator"),
};

const STUDENT_FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::UserPatient,
        title: "Simulated Patients",
        description: "Practise nutrition consultations with realistic AI patients, each with their own medical history and goals.",
    },
    Feature {
        icon: IconKind::Calendar,
        title: "Session Scheduling",
        description: "Book practice sessions when it suits you and pick up where you left off.",
    },
    Feature {
        icon: IconKind::ClipboardCheck,
        title: "Instant Feedback",
        description: "Receive a rated review after every session with concrete points to improve.",
    },
];

const EDUCATOR_FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Book,
        title: "Case Library",
        description: "Build patient cases for your curriculum and assign them to a cohort in minutes.",
    },
    Feature {
        icon: IconKind::Users,
        title: "Cohort Overview",
        description: "Follow every student's sessions, ratings and conversation logs from one dashboard.",
    },
    Feature {
        icon: IconKind::Coins,
        title: "Shared Credits",
        description: "Buy session credits for the whole programme and distribute them as needed.",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Practising with simulated patients before my placement gave me so much confidence. The feedback after each session told me exactly what to work on.",
        name: "Hannah Meyer",
        role: "Dietetics Student",
        avatar_url: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&w=256&q=80",
        audience: STUDENT,
    },
    Testimonial {
        quote: "We use DietitianLab to prepare our whole cohort for clinical rotations. Being able to review the conversation logs makes coaching far more effective.",
        name: "Dr. James Okafor",
        role: "Programme Lead",
        avatar_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&w=256&q=80",
        audience: EDUCATOR,
    },
    Testimonial {
        quote: "The patients feel real. Working through tricky histories on my own schedule made the exam consultations feel familiar.",
        name: "Priya Nair",
        role: "Dietetics Student",
        avatar_url: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?auto=format&fit=crop&w=256&q=80",
        audience: STUDENT,
    },
];

const STUDENT_PLANS: &[PricingPlan] = &[
    PricingPlan {
        title: "Trial",
        price: "Free",
        description: "Try your first consultations",
        features: &[
            PlanFeature { text: "3 practice sessions", included: true },
            PlanFeature { text: "Session feedback", included: true },
            PlanFeature { text: "Full case library", included: false },
            PlanFeature { text: "Conversation history", included: false },
        ],
        popular: false,
        audience: STUDENT,
    },
    PricingPlan {
        title: "Student",
        price: "$14.99",
        description: "For regular practice",
        features: &[
            PlanFeature { text: "30 practice sessions", included: true },
            PlanFeature { text: "Session feedback", included: true },
            PlanFeature { text: "Full case library", included: true },
            PlanFeature { text: "Conversation history", included: true },
        ],
        popular: true,
        audience: STUDENT,
    },
];

const EDUCATOR_PLANS: &[PricingPlan] = &[
    PricingPlan {
        title: "Classroom",
        price: "$49.99",
        description: "For a single course",
        features: &[
            PlanFeature { text: "Up to 25 students", included: true },
            PlanFeature { text: "Custom patient cases", included: true },
            PlanFeature { text: "Cohort overview", included: true },
            PlanFeature { text: "Shared credit pool", included: false },
        ],
        popular: false,
        audience: EDUCATOR,
    },
    PricingPlan {
        title: "Programme",
        price: "$129.99",
        description: "For whole dietetics programmes",
        features: &[
            PlanFeature { text: "Unlimited students", included: true },
            PlanFeature { text: "Custom patient cases", included: true },
            PlanFeature { text: "Cohort overview", included: true },
            PlanFeature { text: "Shared credit pool", included: true },
        ],
        popular: true,
        audience: EDUCATOR,
    },
];

pub static DIETITIAN_LAB: SiteContent = SiteContent {
    brand: "DietitianLab",
    tagline: "Consultation practice for the next generation of dietitians.",
    hero: Hero {
        title: "Practise Real Consultations Before Your First Patient",
        subtitle: "Train with simulated patients, get feedback after every session, \
                   and walk into your placement with confidence.",
        primary: Link { label: "Sign Up", href: "/signup" },
        secondary: Link { label: "Login", href: "/login" },
        image_src: "/hero-dietitian.jpg",
        image_alt: "Dietitian consultation practice",
        placeholder_title: "Consultation Practice",
        placeholder_caption: "Realistic patients, honest feedback",
    },
    features_header: SectionHeader {
        title: "Built for Training",
        description: "Tools for students who practise and educators who teach",
    },
    feature_groups: &[
        FeatureGroup { audience: STUDENT, features: STUDENT_FEATURES },
        FeatureGroup { audience: EDUCATOR, features: EDUCATOR_FEATURES },
    ],
    testimonials_header: SectionHeader {
        title: "Trusted by Students and Educators",
        description: "Hear from the people who practise and teach with DietitianLab",
    },
    testimonials: TESTIMONIALS,
    pricing_header: SectionHeader {
        title: "Plans for Every Stage",
        description: "Start free and upgrade when you need more sessions",
    },
    plan_groups: &[
        PlanGroup { audience: STUDENT, plans: STUDENT_PLANS },
        PlanGroup { audience: EDUCATOR, plans: EDUCATOR_PLANS },
    ],
    footer_columns: &[
        FooterColumn {
            heading: "Quick Links",
            links: &[
                Link { label: "About Us", href: "/about" },
                Link { label: "Features", href: "/features" },
                Link { label: "Pricing", href: "/pricing" },
                Link { label: "Contact", href: "/contact" },
            ],
        },
        FooterColumn {
            heading: "For Users",
            links: &[
                Link { label: "Student Sign Up", href: "/signup" },
                Link { label: "Educator Sign Up", href: "/signup?role=educator" },
                Link { label: "Login", href: "/login" },
                Link { label: "FAQ", href: "/faq" },
            ],
        },
    ],
    contact: ContactInfo {
        address_lines: &["48 Wellness Avenue", "Boston, MA 02115"],
        phone_label: "+1 (555) 987-6543",
        phone_href: "tel:+1-555-987-6543",
        email: "hello@dietitianlab.com",
    },
    socials: &[
        SocialLink { icon: IconKind::Twitter, label: "Twitter", href: "https://twitter.com/dietitianlab" },
        SocialLink { icon: IconKind::Instagram, label: "Instagram", href: "https://instagram.com/dietitianlab" },
        SocialLink { icon: IconKind::LinkedIn, label: "LinkedIn", href: "https://linkedin.com/company/dietitianlab" },
    ],
    legal_links: &[
        Link { label: "Terms of Service", href: "/terms" },
        Link { label: "Privacy Policy", href: "/privacy" },
    ],
};
