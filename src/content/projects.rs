#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    EmbeddedSystems,
    Web,
    Mobile,
    DevOps,
    MachineLearning,
    Database,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 6] = [
        ProjectCategory::EmbeddedSystems,
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::DevOps,
        ProjectCategory::MachineLearning,
        ProjectCategory::Database,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ProjectCategory::EmbeddedSystems => "embedded_systems",
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::DevOps => "devops",
            ProjectCategory::MachineLearning => "ml",
            ProjectCategory::Database => "database",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::EmbeddedSystems => "Embedded Systems",
            ProjectCategory::Web => "Web",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::DevOps => "DevOps",
            ProjectCategory::MachineLearning => "Machine Learning",
            ProjectCategory::Database => "Database",
        }
    }
}

/// Gallery filter: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    /// Filters in the order the gallery shows them.
    pub fn options() -> Vec<ProjectFilter> {
        std::iter::once(ProjectFilter::All)
            .chain(ProjectCategory::ALL.into_iter().map(ProjectFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "Projects",
            ProjectFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(category) => project.category == category,
        }
    }

    /// Next option, wrapping around.
    pub fn next(self) -> Self {
        self.step(1)
    }

    /// Previous option, wrapping around.
    pub fn prev(self) -> Self {
        self.step(-1)
    }

    fn step(self, delta: isize) -> Self {
        let options = Self::options();
        let len = options.len() as isize;
        let current = options.iter().position(|f| *f == self).unwrap_or(0) as isize;
        options[(current + delta).rem_euclid(len) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub kind: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub key_points: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

/// Projects matching `filter`, in source order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Movie Management System",
        period: "2024 March - 2024 May",
        kind: "Web Application",
        category: ProjectCategory::Web,
        description: "A comprehensive movie management system built with ASP.NET Core MVC, \
featuring user authentication, role-based access control, and complete CRUD operations.",
        technologies: &[
            "C#",
            "ASP.NET Core MVC",
            "Entity Framework Core",
            "SQL Server",
            "Bootstrap",
        ],
        key_points: &[
            "Secure user management with role-based access control",
            "Full CRUD operations for movie management using Entity Framework Core",
            "Responsive interface built with Bootstrap",
        ],
        github: Some("https://github.com/chavee716/Movie_Explorer-ASP.NET_Web_App"),
        demo: None,
    },
    Project {
        title: "Smart Trolley System",
        period: "2024 March - 2024 May",
        kind: "Embedded Systems",
        category: ProjectCategory::EmbeddedSystems,
        description: "An IoT-based smart trolley system for supermarket shopping using RFID, \
weight sensors, and real-time inventory tracking.",
        technologies: &["RFID", "IoT", "Raspberry Pi", "Node.js", "Next.js", "MongoDB", "MQTT"],
        key_points: &[
            "Automated product scanning with RFID",
            "Real-time weight verification with load cell sensors",
            "Automatic billing with real-time error handling",
        ],
        github: Some("https://github.com/chavee716/Smart_Trolley_System"),
        demo: None,
    },
    Project {
        title: "My Portfolio Website",
        period: "2025 Feb - 2025 March",
        kind: "Web Development",
        category: ProjectCategory::Web,
        description: "A personal portfolio to showcase projects, skills, and experience.",
        technologies: &["Next.js", "React", "Tailwind CSS", "JavaScript"],
        key_points: &[
            "Backend email service for direct visitor communication",
            "Light and dark mode",
        ],
        github: None,
        demo: None,
    },
    Project {
        title: "EV Charging Booking System",
        period: "2024 - PRESENT",
        kind: "Web application + Mobile application",
        category: ProjectCategory::Mobile,
        description: "Shows available charging stations near the user's live location and \
books a slot based on availability.",
        technologies: &["React", "React Native", "Node.js", "MongoDB", "Google Maps API"],
        key_points: &[
            "Timeslot booking at any station",
            "JWT authentication and role-based access control",
        ],
        github: Some("https://github.com/chavee716/Electric_Vehicle_Charging_Booking_System"),
        demo: None,
    },
    Project {
        title: "To Do List Tracker",
        period: "2024 Dec - 2025 Feb",
        kind: "DevOps + Web Application",
        category: ProjectCategory::DevOps,
        description: "DevOps pipeline implementation for a To Do List web application.",
        technologies: &["GitHub Actions", "Jenkins", "Docker", "Terraform", "AWS EC2"],
        key_points: &[
            "Jenkins CI/CD pipeline building frontend and backend images",
            "EC2 provisioning automated with Terraform",
        ],
        github: Some("https://github.com/chavee716/devops"),
        demo: None,
    },
    Project {
        title: "Hotel Booking and Management System",
        period: "2024 Jan - 2024 March",
        kind: "Web Application",
        category: ProjectCategory::Web,
        description: "Allows users to book hotels and add their hotels to the app and manage them.",
        technologies: &["React", "Node.js", "Express.js", "MongoDB", "Tailwind CSS"],
        key_points: &[
            "Pagination and lazy loading",
            "Search with filtering and indexing",
            "Role-based access control",
        ],
        github: Some("https://github.com/chavee716/Hotel_Booking_Application"),
        demo: None,
    },
    Project {
        title: "Mushroom Classification System",
        period: "2024 Sep - 2024 Dec",
        kind: "Machine Learning",
        category: ProjectCategory::MachineLearning,
        description: "Classifies mushrooms as poisonous or edible based on their characteristics.",
        technologies: &["Python", "Scikit-learn", "Pandas", "Matplotlib"],
        key_points: &["Decision Tree model with 99.63% accuracy"],
        github: Some("https://github.com/chavee716/Mushroom_Classification"),
        demo: None,
    },
    Project {
        title: "Real-Time Face Mask Detection System",
        period: "2024 Dec - 2025 May",
        kind: "Artificial Intelligence",
        category: ProjectCategory::MachineLearning,
        description: "Real-time face mask detection using OpenCV, TensorFlow, and deep learning.",
        technologies: &["Python", "TensorFlow", "OpenCV", "NumPy"],
        key_points: &[
            "DNN face detection feeding a CNN mask classifier",
            "Email alerts with a cooldown timer",
        ],
        github: Some("https://github.com/chavee716/Face-Mask-Detection-System"),
        demo: None,
    },
    Project {
        title: "Car Rental System",
        period: "2024 Jan - 2024 March",
        kind: "MySQL Application",
        category: ProjectCategory::Database,
        description: "A database application for managing car rentals.",
        technologies: &["MySQL", "Visual Paradigm"],
        key_points: &["2NF schema", "Query times reduced through indexing"],
        github: None,
        demo: None,
    },
    Project {
        title: "Hospital Management System",
        period: "2024 Jan - 2024 March",
        kind: ".NET Application",
        category: ProjectCategory::Web,
        description: "CRUD operations on patient records and doctor information for hospital staff.",
        technologies: &[".NET", "C#", "SQL", "WFA"],
        key_points: &["Windows Forms interface backed by a SQL database"],
        github: None,
        demo: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_keeps_every_project_in_order() {
        let filtered = filter_projects(PROJECTS, ProjectFilter::All);
        assert_eq!(filtered.len(), PROJECTS.len());
        assert_eq!(filtered[0].title, PROJECTS[0].title);
    }

    #[test]
    fn category_filter_keeps_only_matching() {
        let filtered = filter_projects(PROJECTS, ProjectFilter::Only(ProjectCategory::MachineLearning));
        assert_eq!(filtered.len(), 2);
        assert!(filtered
            .iter()
            .all(|p| p.category == ProjectCategory::MachineLearning));
        assert_eq!(filtered[0].title, "Mushroom Classification System");
    }

    #[test]
    fn filter_cycles_through_all_options() {
        let mut filter = ProjectFilter::All;
        for _ in 0..ProjectFilter::options().len() {
            filter = filter.next();
        }
        assert_eq!(filter, ProjectFilter::All);
        assert_eq!(
            ProjectFilter::All.prev(),
            ProjectFilter::Only(ProjectCategory::Database)
        );
    }

    #[test]
    fn category_ids_match_labels_order() {
        let ids: Vec<_> = ProjectCategory::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(
            ids,
            vec!["embedded_systems", "web", "mobile", "devops", "ml", "database"]
        );
    }
}
