//! PropertyPro - property management for tenants and property managers.

use crate::types::*;

const TENANT: Audience = Audience {
    key: "tenant",
    label: "Tenants",
    accent: Accent::Blue,
    signup_role: None,
};

const AGENT: Audience = Audience {
    key: "agent",
    label: "Property Managers",
    accent: Accent::Teal,
    signup_role: Some("agent"),
};

const TENANT_FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Home,
        title: "Property Browsing",
        description: "Browse available properties with detailed information, photos, and virtual tours.",
    },
    Feature {
        icon: IconKind::Calendar,
        title: "Maintenance Scheduling",
        description: "Schedule maintenance requests and track their status in real-time.",
    },
    Feature {
        icon: IconKind::Invoice,
        title: "Online Rent Payments",
        description: "Pay rent securely online and access payment history anytime.",
    },
];

const AGENT_FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Tools,
        title: "Maintenance Management",
        description: "Track and manage maintenance requests efficiently with automated workflows.",
    },
    Feature {
        icon: IconKind::Chat,
        title: "Tenant Communication",
        description: "Communicate with tenants through a centralized messaging system.",
    },
    Feature {
        icon: IconKind::ChartLine,
        title: "Financial Reporting",
        description: "Generate comprehensive financial reports and track property performance.",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "This platform has made renting so much easier. I can pay rent online, submit maintenance requests, and communicate with my property manager all in one place.",
        name: "Sarah Johnson",
        role: "Tenant",
        avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=256&q=80",
        audience: TENANT,
    },
    Testimonial {
        quote: "As a property manager, this system has streamlined our operations significantly. The financial reporting tools are particularly valuable for our business.",
        name: "Michael Rodriguez",
        role: "Property Manager",
        avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=256&q=80",
        audience: AGENT,
    },
    Testimonial {
        quote: "I love how easy it is to schedule maintenance requests. The response time has improved dramatically since my building started using this platform.",
        name: "Emily Chen",
        role: "Tenant",
        avatar_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=256&q=80",
        audience: TENANT,
    },
];

const TENANT_PLANS: &[PricingPlan] = &[
    PricingPlan {
        title: "Basic",
        price: "Free",
        description: "For individual tenants",
        features: &[
            PlanFeature { text: "Property browsing", included: true },
            PlanFeature { text: "Maintenance requests", included: true },
            PlanFeature { text: "Online rent payments", included: true },
            PlanFeature { text: "Document storage", included: false },
            PlanFeature { text: "Tenant portal", included: false },
        ],
        popular: false,
        audience: TENANT,
    },
    PricingPlan {
        title: "Premium",
        price: "$9.99",
        description: "For tenants who want more",
        features: &[
            PlanFeature { text: "Property browsing", included: true },
            PlanFeature { text: "Maintenance requests", included: true },
            PlanFeature { text: "Online rent payments", included: true },
            PlanFeature { text: "Document storage", included: true },
            PlanFeature { text: "Tenant portal", included: true },
        ],
        popular: true,
        audience: TENANT,
    },
];

const AGENT_PLANS: &[PricingPlan] = &[
    PricingPlan {
        title: "Starter",
        price: "$29.99",
        description: "For small property managers",
        features: &[
            PlanFeature { text: "Up to 10 properties", included: true },
            PlanFeature { text: "Maintenance management", included: true },
            PlanFeature { text: "Tenant communication", included: true },
            PlanFeature { text: "Financial reporting", included: false },
            PlanFeature { text: "Owner portal", included: false },
        ],
        popular: false,
        audience: AGENT,
    },
    PricingPlan {
        title: "Professional",
        price: "$59.99",
        description: "For growing property managers",
        features: &[
            PlanFeature { text: "Up to 50 properties", included: true },
            PlanFeature { text: "Maintenance management", included: true },
            PlanFeature { text: "Tenant communication", included: true },
            PlanFeature { text: "Financial reporting", included: true },
            PlanFeature { text: "Owner portal", included: true },
        ],
        popular: true,
        audience: AGENT,
    },
    PricingPlan {
        title: "Enterprise",
        price: "$99.99",
        description: "For large property managers",
        features: &[
            PlanFeature { text: "Unlimited properties", included: true },
            PlanFeature { text: "Maintenance management", included: true },
            PlanFeature { text: "Tenant communication", included: true },
            PlanFeature { text: "Financial reporting", included: true },
            PlanFeature { text: "Owner portal", included: true },
        ],
        popular: false,
        audience: AGENT,
    },
];

pub static PROPERTY_PRO: SiteContent = SiteContent {
    brand: "PropertyPro",
    tagline: "Simplifying property management for tenants and agents alike.",
    hero: Hero {
        title: "Simplify Your Property Management Experience",
        subtitle: "A comprehensive solution for property owners, agents, and tenants. \
                   Streamline operations, improve communication, and enhance tenant satisfaction.",
        primary: Link { label: "Sign Up", href: "/signup" },
        secondary: Link { label: "Login", href: "/login" },
        image_src: "/hero-property.jpg",
        image_alt: "Modern property management",
        placeholder_title: "Modern Property Management",
        placeholder_caption: "Beautiful properties, happy tenants",
    },
    features_header: SectionHeader {
        title: "Features for Everyone",
        description: "Our platform offers powerful tools for both tenants and property managers",
    },
    feature_groups: &[
        FeatureGroup { audience: TENANT, features: TENANT_FEATURES },
        FeatureGroup { audience: AGENT, features: AGENT_FEATURES },
    ],
    testimonials_header: SectionHeader {
        title: "What Our Users Say",
        description: "Hear from tenants and property managers who use our platform every day",
    },
    testimonials: TESTIMONIALS,
    pricing_header: SectionHeader {
        title: "Simple, Transparent Pricing",
        description: "Choose the plan that works best for you",
    },
    plan_groups: &[
        PlanGroup { audience: TENANT, plans: TENANT_PLANS },
        PlanGroup { audience: AGENT, plans: AGENT_PLANS },
    ],
    footer_columns: &[
        FooterColumn {
            heading: "Quick Links",
            links: &[
                Link { label: "About Us", href: "/about" },
                Link { label: "Features", href: "/features" },
                Link { label: "Pricing", href: "/pricing" },
                Link { label: "Blog", href: "/blog" },
                Link { label: "Contact", href: "/contact" },
            ],
        },
        FooterColumn {
            heading: "For Users",
            links: &[
                Link { label: "Tenant Sign Up", href: "/signup" },
                Link { label: "Agent Sign Up", href: "/signup?role=agent" },
                Link { label: "Login", href: "/login" },
                Link { label: "Help Center", href: "/help" },
                Link { label: "FAQ", href: "/faq" },
            ],
        },
    ],
    contact: ContactInfo {
        address_lines: &["123 Property Street, Suite 100", "San Francisco, CA 94107"],
        phone_label: "+1 (555) 123-4567",
        phone_href: "tel:+1-555-123-4567",
        email: "info@propertypro.com",
    },
    socials: &[
        SocialLink { icon: IconKind::Facebook, label: "Facebook", href: "https://facebook.com/propertypro" },
        SocialLink { icon: IconKind::Twitter, label: "Twitter", href: "https://twitter.com/propertypro" },
        SocialLink { icon: IconKind::Instagram, label: "Instagram", href: "https://instagram.com/propertypro" },
        SocialLink { icon: IconKind::LinkedIn, label: "LinkedIn", href: "https://linkedin.com/company/propertypro" },
    ],
    legal_links: &[
        Link { label: "Terms of Service", href: "/terms" },
        Link { label: "Privacy Policy", href: "/privacy" },
        Link { label: "Cookie Policy", href: "/cookies" },
    ],
};
