/// Badge shown above the hero title.
pub const HEADLINE: &str = "BSc. Computer Engineering Undergraduate";

pub const PROFILE: &str = "An enthusiastic Computer Engineering undergraduate passionate about \
DevOps, Machine Learning, and Software Engineering. Aims to apply technical skills and \
innovative thinking to cutting-edge projects while eagerly learning new technologies in a \
collaborative and forward-thinking team.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub label: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        label: "Programming",
        skills: &["Python", "Java", "C++", "JavaScript", "TypeScript", "C#"],
    },
    SkillGroup {
        label: "Web Development",
        skills: &[
            "HTML",
            "CSS",
            "React",
            "NextJs",
            "NodeJs",
            "ExpressJs",
            "Tailwind CSS",
            "React Native",
        ],
    },
    SkillGroup {
        label: "DevOps",
        skills: &["Docker", "AWS", "Linux", "CI/CD"],
    },
    SkillGroup {
        label: "Version Control",
        skills: &["Git", "GitHub"],
    },
    SkillGroup {
        label: "Databases",
        skills: &["MySQL", "MongoDB"],
    },
    SkillGroup {
        label: "Tools",
        skills: &["Figma", "Visual Studio", "IntelliJ IDEA", "Postman", "Jupyter", "Jira"],
    },
];

pub const SOFT_SKILLS: &[&str] = &[
    "Project Management",
    "Problem Solving",
    "Teamwork",
    "Time Management",
    "Leadership",
    "Presentation Skills",
    "Critical Thinking",
    "Public Relations",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub details: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "BSc Hons. Computer Engineering (UG)",
        institution: "Faculty of Engineering, University of Ruhuna",
        period: "2022 - present",
        details: "Current GPA: 3.49 / 4.0",
    },
    Education {
        degree: "G.C.E. Advanced Level in Physical Science",
        institution: "Richmond College, Galle",
        period: "2007-2020",
        details: "AAA",
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Docker For Beginners - KodeKloud",
    "Supervised Machine Learning - Stanford University - Coursera",
    "Unsupervised Machine Learning - Stanford University - Coursera",
    "Advanced Learning Algorithms - Stanford University - Coursera",
    "Data Science Tools - IBM",
    "Python Intermediate - University of Moratuwa",
    "Data Science 101 - IBM",
    "Object-Oriented Programming - Udemy",
    "SQL Intermediate - SoloLearn",
];

pub const VOLUNTEERING: &[&str] = &[
    "Volunteered at Eminence 4.0 as a Logistics Team member in the organizing committee.",
    "Volunteered at Mehewara, conducting Mathematics seminars for rural O/L students.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    email: "chaveendias@gmail.com",
    github: "https://github.com/chavee716",
    linkedin: "https://www.linkedin.com/in/chaveen-dias-8935b5288/",
};
