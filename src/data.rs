//! Every piece of site copy lives here as const slices so the pages stay
//! markup-only. Nothing in this module is ever mutated.

pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "web-development",
        icon: "🖥️",
        title: "Web Development",
        description: "Custom web applications built with modern technologies like React, Next.js, and Node.js.",
    },
    Service {
        id: "mobile-development",
        icon: "📱",
        title: "Mobile App Development",
        description: "Cross-platform and native mobile applications for iOS and Android devices.",
    },
    Service {
        id: "cloud-solutions",
        icon: "☁️",
        title: "Cloud Solutions",
        description: "Scalable cloud infrastructure and solutions using AWS, Azure, and Google Cloud.",
    },
    Service {
        id: "data-services",
        icon: "🗄️",
        title: "Data Services",
        description: "Data analytics, machine learning, and AI solutions to drive business insights.",
    },
    Service {
        id: "ui-ux-design",
        icon: "🎨",
        title: "UI/UX Design",
        description: "User-centered design that creates intuitive and engaging digital experiences.",
    },
    Service {
        id: "devops",
        icon: "⚙️",
        title: "DevOps Services",
        description: "Streamlined development operations with CI/CD pipelines and automated testing.",
    },
];

pub struct DetailedService {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub features: &'static [&'static str],
    pub accent: &'static str,
}

pub const DETAILED_SERVICES: &[DetailedService] = &[
    DetailedService {
        id: "web-development",
        icon: "🖥️",
        title: "Web Development",
        description: "Custom web applications built with modern technologies that deliver exceptional user experiences.",
        category: "development",
        features: &[
            "Single Page Applications (SPAs)",
            "Progressive Web Apps (PWAs)",
            "E-commerce platforms",
            "Enterprise web applications",
            "Content Management Systems (CMS)",
            "API development & integration",
        ],
        accent: "linear-gradient(to right, #3b82f6, #22d3ee)",
    },
    DetailedService {
        id: "mobile-development",
        icon: "📱",
        title: "Mobile App Development",
        description: "Cross-platform and native mobile applications that work seamlessly across all devices.",
        category: "development",
        features: &[
            "iOS and Android native apps",
            "Cross-platform development",
            "Mobile UI/UX design",
            "App performance optimization",
            "Wearable app development",
            "App maintenance & support",
        ],
        accent: "linear-gradient(to right, #a855f7, #ec4899)",
    },
    DetailedService {
        id: "cloud-solutions",
        icon: "☁️",
        title: "Cloud Solutions",
        description: "Scalable cloud infrastructure and services that provide flexibility, security, and performance.",
        category: "infrastructure",
        features: &[
            "Cloud migration strategy",
            "AWS, Azure & GCP implementation",
            "Cloud-native application development",
            "Serverless architecture",
            "DevOps automation",
            "Cloud security & compliance",
        ],
        accent: "linear-gradient(to right, #6366f1, #2563eb)",
    },
    DetailedService {
        id: "data-services",
        icon: "🗄️",
        title: "Data Services",
        description: "Comprehensive data solutions that transform raw data into valuable business insights.",
        category: "data",
        features: &[
            "Big data processing & analytics",
            "Business intelligence (BI)",
            "Data warehousing & ETL",
            "Predictive analytics",
            "Real-time data processing",
            "Custom dashboards & reporting",
        ],
        accent: "linear-gradient(to right, #22c55e, #2dd4bf)",
    },
    DetailedService {
        id: "ui-ux-design",
        icon: "🎨",
        title: "UI/UX Design",
        description: "User-centered design that creates intuitive and engaging digital experiences.",
        category: "design",
        features: &[
            "User research & personas",
            "Information architecture",
            "Wireframing & prototyping",
            "Visual design & branding",
            "Usability testing",
            "Design systems",
        ],
        accent: "linear-gradient(to right, #facc15, #f97316)",
    },
    DetailedService {
        id: "devops",
        icon: "⚙️",
        title: "DevOps Services",
        description: "Streamlined development operations with CI/CD pipelines and automated testing.",
        category: "infrastructure",
        features: &[
            "CI/CD pipeline implementation",
            "Infrastructure as Code (IaC)",
            "Container orchestration",
            "Microservices architecture",
            "Performance monitoring",
            "Automated testing & deployment",
        ],
        accent: "linear-gradient(to right, #ef4444, #db2777)",
    },
    DetailedService {
        id: "ai-ml",
        icon: "🤖",
        title: "AI & Machine Learning",
        description: "Advanced AI and ML solutions that automate processes and unlock new business opportunities.",
        category: "data",
        features: &[
            "Natural Language Processing",
            "Computer Vision",
            "Predictive modeling",
            "Recommendation systems",
            "Automated decision systems",
            "AI-powered chatbots",
        ],
        accent: "linear-gradient(to right, #06b6d4, #3b82f6)",
    },
    DetailedService {
        id: "digital-strategy",
        icon: "📈",
        title: "Digital Strategy",
        description: "Strategic technology consulting to help businesses navigate digital transformation.",
        category: "consulting",
        features: &[
            "Technology roadmapping",
            "Digital transformation",
            "IT architecture consulting",
            "Product strategy",
            "Technology stack assessment",
            "Security & compliance audits",
        ],
        accent: "linear-gradient(to right, #9333ea, #4f46e5)",
    },
];

pub const SERVICE_CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Services"),
    ("development", "Development"),
    ("design", "Design"),
    ("infrastructure", "Infrastructure"),
    ("data", "Data & AI"),
    ("consulting", "Consulting"),
];

pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub bio: &'static str,
    pub department: &'static str,
    pub gradient: &'static str,
    pub linkedin: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub email: Option<&'static str>,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        id: "sarah-johnson",
        name: "Sarah Johnson",
        position: "CEO & Co-Founder",
        bio: "Sarah brings over 15 years of experience in technology leadership. Prior to founding Anvitha Tech, she led product development at several Fortune 500 companies.",
        department: "leadership",
        gradient: "linear-gradient(135deg, #3b82f6, #22d3ee)",
        linkedin: Some("https://linkedin.com/in/sarah-johnson"),
        twitter: Some("https://twitter.com/sarahjohnson"),
        email: Some("sarah@anvithatech.com"),
    },
    TeamMember {
        id: "michael-chen",
        name: "Michael Chen",
        position: "CTO & Co-Founder",
        bio: "Michael is a tech visionary with expertise in software architecture and emerging technologies. He leads our technical strategy and innovation initiatives.",
        department: "leadership",
        gradient: "linear-gradient(135deg, #a855f7, #ec4899)",
        linkedin: Some("https://linkedin.com/in/michael-chen"),
        twitter: Some("https://twitter.com/michaelchen"),
        email: Some("michael@anvithatech.com"),
    },
    TeamMember {
        id: "alex-rodriguez",
        name: "Alex Rodriguez",
        position: "Lead Software Architect",
        bio: "Alex specializes in designing scalable and robust software systems. He oversees our technical architecture and code quality standards.",
        department: "engineering",
        gradient: "linear-gradient(135deg, #22c55e, #2dd4bf)",
        linkedin: Some("https://linkedin.com/in/alex-rodriguez"),
        twitter: None,
        email: Some("alex@anvithatech.com"),
    },
    TeamMember {
        id: "emily-patel",
        name: "Emily Patel",
        position: "UX Design Director",
        bio: "Emily leads our design team in creating intuitive and delightful user experiences. She combines creativity with data-driven design principles.",
        department: "design",
        gradient: "linear-gradient(135deg, #facc15, #f97316)",
        linkedin: Some("https://linkedin.com/in/emily-patel"),
        twitter: Some("https://twitter.com/emilypatel"),
        email: Some("emily@anvithatech.com"),
    },
    TeamMember {
        id: "david-kim",
        name: "David Kim",
        position: "Mobile Development Lead",
        bio: "David is an expert in mobile app development across iOS and Android platforms. He drives our mobile strategy and implementation.",
        department: "engineering",
        gradient: "linear-gradient(135deg, #ef4444, #db2777)",
        linkedin: Some("https://linkedin.com/in/david-kim"),
        twitter: None,
        email: Some("david@anvithatech.com"),
    },
    TeamMember {
        id: "jessica-wong",
        name: "Jessica Wong",
        position: "Product Manager",
        bio: "Jessica translates business requirements into technical specifications. She ensures our products meet client needs and market demands.",
        department: "product",
        gradient: "linear-gradient(135deg, #6366f1, #2563eb)",
        linkedin: Some("https://linkedin.com/in/jessica-wong"),
        twitter: Some("https://twitter.com/jessicawong"),
        email: Some("jessica@anvithatech.com"),
    },
    TeamMember {
        id: "rahul-singh",
        name: "Rahul Singh",
        position: "AI Research Lead",
        bio: "Rahul leads our AI initiatives, bringing expertise in machine learning, natural language processing, and computer vision.",
        department: "engineering",
        gradient: "linear-gradient(135deg, #06b6d4, #3b82f6)",
        linkedin: Some("https://linkedin.com/in/rahul-singh"),
        twitter: None,
        email: Some("rahul@anvithatech.com"),
    },
    TeamMember {
        id: "olivia-martinez",
        name: "Olivia Martinez",
        position: "Client Relations Director",
        bio: "Olivia ensures our clients receive exceptional service. She builds strong relationships and ensures client success with our solutions.",
        department: "leadership",
        gradient: "linear-gradient(135deg, #9333ea, #4f46e5)",
        linkedin: Some("https://linkedin.com/in/olivia-martinez"),
        twitter: Some("https://twitter.com/oliviamartinez"),
        email: Some("olivia@anvithatech.com"),
    },
];

pub const TEAM_DEPARTMENTS: &[(&str, &str)] = &[
    ("all", "All Team"),
    ("leadership", "Leadership"),
    ("engineering", "Engineering"),
    ("design", "Design"),
    ("product", "Product"),
];

pub struct Testimonial {
    pub id: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub position: &'static str,
    pub company: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "testimonial-1",
        quote: "Anvitha Technologies transformed our digital presence with a cutting-edge web application that greatly improved our customer engagement and operational efficiency. Their team was professional, responsive, and delivered beyond our expectations.",
        author: "Sarah Johnson",
        position: "CTO",
        company: "Nexus Innovations",
    },
    Testimonial {
        id: "testimonial-2",
        quote: "Working with Anvitha Tech on our mobile app was a game-changer for our business. Their expertise in UI/UX design and development resulted in an intuitive app that our customers love. The project was delivered on time and within budget.",
        author: "Michael Chen",
        position: "Product Director",
        company: "Elevate Solutions",
    },
    Testimonial {
        id: "testimonial-3",
        quote: "The cloud migration strategy implemented by Anvitha Technologies significantly improved our system performance and reduced our infrastructure costs by 40%. Their team's technical knowledge and attention to detail made the transition seamless.",
        author: "Alexandra Rodriguez",
        position: "IT Director",
        company: "Global Enterprises",
    },
    Testimonial {
        id: "testimonial-4",
        quote: "Anvitha Technologies helped us implement advanced data analytics capabilities that provided valuable insights into our customer behavior. This has directly contributed to a 25% increase in our conversion rates over the past six months.",
        author: "David Williams",
        position: "Marketing VP",
        company: "Spectrum Brands",
    },
];

pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        id: "faq-services",
        question: "What services does Anvitha Technologies offer?",
        answer: "We offer a comprehensive range of technology services including web development, mobile app development, cloud solutions, data analytics and AI/ML, UI/UX design, and DevOps services. Our team can help with everything from small business websites to enterprise-scale applications.",
    },
    FaqEntry {
        id: "faq-cost",
        question: "How much does it cost to develop a website or app?",
        answer: "The cost of development varies greatly depending on the scope, complexity, and specific requirements of your project. We offer customized quotes based on your unique needs. Contact us for a free consultation and estimate tailored to your project.",
    },
    FaqEntry {
        id: "faq-timeline",
        question: "What is your typical project timeline?",
        answer: "Project timelines depend on the scope and complexity of the work. A simple website might take 2-4 weeks, while complex applications can take several months. During our initial consultation, we'll provide you with a detailed timeline based on your specific project requirements.",
    },
    FaqEntry {
        id: "faq-support",
        question: "Do you offer ongoing support and maintenance?",
        answer: "Yes, we offer comprehensive support and maintenance packages to ensure your digital products continue to run smoothly after launch. Our support services include regular updates, security patches, performance optimization, and technical assistance when needed.",
    },
    FaqEntry {
        id: "faq-communication",
        question: "How do you handle project communication?",
        answer: "We believe in transparent and regular communication. Depending on project needs, we typically use a combination of weekly video calls, project management tools, and email updates. Each client is assigned a dedicated project manager who serves as your main point of contact throughout the project.",
    },
    FaqEntry {
        id: "faq-technologies",
        question: "What technologies and frameworks do you specialize in?",
        answer: "Our team is proficient in a wide range of modern technologies including React, Next.js, Angular, Vue.js, Node.js, Python, React Native, Flutter, AWS, Azure, Google Cloud, and much more. We stay up-to-date with the latest advancements and choose the best technology stack based on your specific project needs.",
    },
    FaqEntry {
        id: "faq-existing",
        question: "Can you help with an existing project that needs improvements?",
        answer: "Absolutely! We often work with clients who need to update, improve, or scale existing applications. Our team can conduct a thorough code review, identify areas for improvement, and implement necessary changes to enhance performance, security, and functionality.",
    },
    FaqEntry {
        id: "faq-after-submit",
        question: "What happens after I submit the contact form?",
        answer: "After you submit the contact form, one of our team members will reach out to you within 24 business hours to schedule an initial consultation. During this call, we'll discuss your project requirements, answer any questions you may have, and determine the best path forward for your needs.",
    },
];

pub struct CaseStudyPreview {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub gradient: &'static str,
}

pub const CASE_STUDY_PREVIEWS: &[CaseStudyPreview] = &[
    CaseStudyPreview {
        id: "fintech-app",
        title: "FinTech Mobile App",
        description: "Developed a secure and user-friendly mobile banking application with advanced features.",
        category: "Mobile Development",
        gradient: "linear-gradient(135deg, #3b82f6, #22d3ee)",
    },
    CaseStudyPreview {
        id: "ecommerce-platform",
        title: "E-commerce Platform",
        description: "Built a scalable e-commerce platform with advanced product recommendations and personalization.",
        category: "Web Development",
        gradient: "linear-gradient(135deg, #a855f7, #ec4899)",
    },
    CaseStudyPreview {
        id: "healthcare-analytics",
        title: "Healthcare Analytics",
        description: "Created a data analytics platform for healthcare providers to improve patient outcomes.",
        category: "Data & AI",
        gradient: "linear-gradient(135deg, #22c55e, #2dd4bf)",
    },
];

pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub industry: &'static str,
    pub services: &'static [&'static str],
    pub results: &'static [&'static str],
    pub gradient: &'static str,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "fintech-dashboard",
        title: "Enterprise FinTech Dashboard Redesign",
        description: "Modernizing a legacy financial platform with improved UX and performance metrics",
        industry: "Financial Services",
        services: &["UI/UX Design", "Frontend Development", "Performance Optimization"],
        results: &[
            "42% increase in user engagement",
            "65% reduction in load time",
            "89% positive feedback from user testing",
        ],
        gradient: "linear-gradient(135deg, #3b82f6, #22d3ee)",
    },
    CaseStudy {
        id: "healthcare-app",
        title: "Patient-Centered Healthcare Application",
        description: "Building a HIPAA-compliant mobile solution for patient management and telehealth services",
        industry: "Healthcare",
        services: &["Mobile Development", "API Integration", "Security Compliance"],
        results: &[
            "30% reduction in administrative workload",
            "95% patient satisfaction rate",
            "22% increase in appointment completions",
        ],
        gradient: "linear-gradient(135deg, #22c55e, #2dd4bf)",
    },
    CaseStudy {
        id: "ecommerce-platform",
        title: "Global E-commerce Platform Migration",
        description: "Seamlessly transitioning a major retailer to a scalable, microservices-based architecture",
        industry: "Retail",
        services: &["Cloud Migration", "Microservices Architecture", "DevOps Implementation"],
        results: &[
            "300% improvement in scalability during peak seasons",
            "52% reduction in infrastructure costs",
            "99.99% uptime since deployment",
        ],
        gradient: "linear-gradient(135deg, #a855f7, #ec4899)",
    },
    CaseStudy {
        id: "manufacturing-iot",
        title: "Smart Manufacturing IoT Solution",
        description: "Implementing IoT sensors and real-time analytics to optimize production workflows",
        industry: "Manufacturing",
        services: &["IoT Integration", "Real-time Analytics", "Custom Dashboard Development"],
        results: &[
            "27% increase in production efficiency",
            "35% reduction in maintenance costs",
            "18% improvement in product quality metrics",
        ],
        gradient: "linear-gradient(135deg, #f97316, #facc15)",
    },
];

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub gradient: &'static str,
}

pub const FEATURED_PROJECTS: &[Project] = &[
    Project {
        id: "project1",
        title: "E-commerce Platform",
        description: "A comprehensive e-commerce solution with advanced features like personalized recommendations and seamless checkout flow.",
        category: "web",
        gradient: "linear-gradient(135deg, #3b82f6, #22d3ee)",
    },
    Project {
        id: "project2",
        title: "Healthcare Mobile App",
        description: "An intuitive mobile application connecting patients with healthcare providers for virtual consultations and appointment management.",
        category: "mobile",
        gradient: "linear-gradient(135deg, #a855f7, #ec4899)",
    },
    Project {
        id: "project3",
        title: "Financial Dashboard",
        description: "A data-rich financial analytics dashboard with real-time visualization and predictive analytics capabilities.",
        category: "web",
        gradient: "linear-gradient(135deg, #22c55e, #2dd4bf)",
    },
];

pub const PORTFOLIO_CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Work"),
    ("web", "Web Development"),
    ("mobile", "Mobile Apps"),
    ("ui", "UI/UX Design"),
    ("cloud", "Cloud Solutions"),
];

pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 10, suffix: "+", label: "Years Experience" },
    Stat { value: 250, suffix: "+", label: "Projects Completed" },
    Stat { value: 100, suffix: "+", label: "Happy Clients" },
    Stat { value: 30, suffix: "+", label: "Team Members" },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2015",
        title: "Foundation",
        description: "Anvitha Technologies was founded with a mission to deliver cutting-edge tech solutions to businesses of all sizes.",
    },
    Milestone {
        year: "2017",
        title: "Early Growth",
        description: "Expanded our team to 10 members and opened our first dedicated office space in Silicon Valley.",
    },
    Milestone {
        year: "2019",
        title: "International Expansion",
        description: "Opened our first international office and expanded our client base to Europe and Asia.",
    },
    Milestone {
        year: "2021",
        title: "New Service Lines",
        description: "Launched our AI and Machine Learning division to help clients leverage advanced technologies.",
    },
    Milestone {
        year: "2023",
        title: "Strategic Partnerships",
        description: "Formed strategic partnerships with leading tech companies to enhance our service offerings.",
    },
    Milestone {
        year: "2025",
        title: "Today",
        description: "Now with over 30 team members across three continents, we continue to innovate and grow.",
    },
];

pub struct Value {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        icon: "🎯",
        title: "Excellence",
        description: "We strive for excellence in everything we do, from code quality to client communication.",
        accent: "#3b82f6",
    },
    Value {
        icon: "⭐",
        title: "Innovation",
        description: "We embrace new technologies and methodologies to deliver innovative solutions.",
        accent: "#a855f7",
    },
    Value {
        icon: "👥",
        title: "Collaboration",
        description: "We believe in the power of teamwork and collaborative problem-solving.",
        accent: "#22c55e",
    },
    Value {
        icon: "📈",
        title: "Growth",
        description: "We are committed to continuous learning and professional growth.",
        accent: "#eab308",
    },
    Value {
        icon: "💻",
        title: "Craftsmanship",
        description: "We take pride in our technical craftsmanship and attention to detail.",
        accent: "#ef4444",
    },
    Value {
        icon: "❤️",
        title: "Integrity",
        description: "We operate with honesty, transparency, and strong ethical principles.",
        accent: "#6366f1",
    },
];

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Discovery",
        description: "We start by understanding your business, goals, and requirements through in-depth consultations and research.",
    },
    ProcessStep {
        number: "02",
        title: "Strategy",
        description: "Based on our findings, we develop a comprehensive strategy and roadmap tailored to your specific needs and objectives.",
    },
    ProcessStep {
        number: "03",
        title: "Design",
        description: "Our designers create intuitive, user-centered interfaces and experiences that align with your brand and business goals.",
    },
    ProcessStep {
        number: "04",
        title: "Development",
        description: "Our expert developers bring the designs to life using modern technologies and best practices in software development.",
    },
    ProcessStep {
        number: "05",
        title: "Testing",
        description: "Rigorous testing ensures that your solution works flawlessly across all devices and scenarios.",
    },
    ProcessStep {
        number: "06",
        title: "Deployment",
        description: "We carefully deploy your solution to production, ensuring a smooth transition and minimal disruption.",
    },
    ProcessStep {
        number: "07",
        title: "Support",
        description: "Our relationship doesn't end at launch. We provide ongoing support, maintenance, and optimization services.",
    },
];

pub struct TechCategory {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const TECH_STACK: &[TechCategory] = &[
    TechCategory {
        title: "Frontend",
        items: &["React", "Next.js", "TypeScript", "Tailwind CSS", "Framer Motion", "Redux", "Vue.js", "Angular"],
    },
    TechCategory {
        title: "Backend",
        items: &["Node.js", "Express", "NestJS", "Django", "Ruby on Rails", "Spring Boot", "FastAPI", "Laravel"],
    },
    TechCategory {
        title: "Mobile",
        items: &["React Native", "Flutter", "Swift", "Kotlin", "Ionic", "Xamarin", "Capacitor", "Android SDK"],
    },
    TechCategory {
        title: "Database",
        items: &["MongoDB", "PostgreSQL", "MySQL", "Redis", "Firebase", "DynamoDB", "Supabase", "Prisma"],
    },
    TechCategory {
        title: "Cloud & DevOps",
        items: &["AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "GitHub Actions", "Jenkins", "Terraform"],
    },
];

/// Initials used for team avatars and testimonial badges.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_letter_of_each_word() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("Alexandra Rodriguez"), "AR");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn every_team_member_belongs_to_a_listed_department() {
        for member in TEAM {
            assert!(
                TEAM_DEPARTMENTS
                    .iter()
                    .skip(1) // "all" is the filter wildcard, not a department
                    .any(|(tag, _)| *tag == member.department),
                "{} has unknown department {}",
                member.id,
                member.department
            );
        }
    }

    #[test]
    fn every_detailed_service_belongs_to_a_listed_category() {
        for service in DETAILED_SERVICES {
            assert!(
                SERVICE_CATEGORIES
                    .iter()
                    .skip(1)
                    .any(|(tag, _)| *tag == service.category),
                "{} has unknown category {}",
                service.id,
                service.category
            );
        }
    }

    #[test]
    fn featured_project_categories_exist_in_the_filter_list() {
        for project in FEATURED_PROJECTS {
            assert!(PORTFOLIO_CATEGORIES.iter().any(|(tag, _)| *tag == project.category));
        }
    }

    #[test]
    fn content_ids_are_unique_within_each_table() {
        let mut ids: Vec<&str> = TEAM.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TEAM.len());

        let mut ids: Vec<&str> = DETAILED_SERVICES.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DETAILED_SERVICES.len());

        let mut ids: Vec<&str> = FAQS.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FAQS.len());
    }
}
