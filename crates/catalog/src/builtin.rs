use crate::domain::{Award, Category, Media, Project, ProjectId, Semester, Student, StudentId};

const PARTNERS: &[&str] = &[
    "Mercedes-Benz",
    "WEG",
    "Dell",
    "TATA",
    "Bosch",
    "Siemens",
    "Embraer",
    "Intel",
    "Microsoft",
    "Google",
    "Amazon",
    "Meta",
    "Tesla",
    "Volvo",
    "Scania",
    "General Electric",
    "Schneider Electric",
    "Rockwell Automation",
    "Cisco",
    "IBM",
    "Oracle",
    "HP",
    "Lenovo",
    "Samsung",
    "LG",
    "Sony",
    "Toyota",
    "Honda",
    "Hyundai",
    "Ford",
    "General Motors",
    "Petrobras",
    "Vale",
    "Suzano",
    "Natura",
    "Ambev",
    "BTG Pactual",
    "Itau",
    "Santander",
];

pub(crate) fn partners() -> impl Iterator<Item = String> {
    PARTNERS.iter().map(|p| p.to_string())
}

fn student(id: &str, name: &str, role: &str) -> Student {
    Student {
        id: StudentId::new(id),
        name: name.into(),
        role: role.into(),
        photo_url: None,
    }
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=800")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

pub(crate) fn projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::new("1"),
            title: "Aura Smart Helmets".into(),
            description: "Next-gen motorcycle helmet with AR safety overlays.".into(),
            long_description: "Aura is a smart helmet designed to reduce accidents by providing heads-up display navigation and blind-spot detection via ultrasonic sensors.".into(),
            category: Category::HardwareIot,
            semester: Semester::Second,
            year: 2023,
            media: Media {
                thumbnail_url: "https://upload.wikimedia.org/wikipedia/commons/3/34/RR1-_Dell_Campus.jpg".into(),
                video_url: Some("https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4".into()),
                gallery_urls: vec![
                    unsplash("photo-1558981403-c5f91cbba527"),
                    unsplash("photo-1600192004735-3929497e8838"),
                ],
                presentation_url: None,
            },
            award: Award::Excellence,
            tags: tags(&["IoT", "Safety", "AR", "Vision"]),
            students: vec![
                student("s1", "Ana Silva", "Hardware Lead"),
                student("s2", "Marco Polo", "UX Designer"),
            ],
            advisor: "Dr. Elizabeth Stone".into(),
            partner: Some("Mercedes-Benz".into()),
        },
        Project {
            id: ProjectId::new("2"),
            title: "EcoTrack AI".into(),
            description: "Personalized carbon footprint tracker using machine learning.".into(),
            long_description: "EcoTrack uses computer vision to identify groceries and estimate their environmental impact.".into(),
            category: Category::Ai,
            semester: Semester::First,
            year: 2024,
            media: Media {
                thumbnail_url: unsplash("photo-1473341304170-971dccb5ac1e"),
                video_url: None,
                gallery_urls: vec![unsplash("photo-1473341304170-971dccb5ac1e")],
                presentation_url: None,
            },
            award: Award::Featured,
            tags: tags(&["Sustainability", "ML", "Data Science"]),
            students: vec![
                student("s3", "Joao Santos", "ML Engineer"),
                student("s4", "Beatriz Costa", "Data Scientist"),
            ],
            advisor: "Prof. Ricardo Gomes".into(),
            partner: Some("Dell".into()),
        },
        Project {
            id: ProjectId::new("3"),
            title: "Industrial Automation 4.0".into(),
            description: "Predictive maintenance system for large scale electrical motors.".into(),
            long_description: "Implementing advanced sensor networks for real-time monitoring of industrial machines.".into(),
            category: Category::HardwareIot,
            semester: Semester::First,
            year: 2024,
            media: Media {
                thumbnail_url: unsplash("photo-1581092160562-40aa08e78837"),
                video_url: None,
                gallery_urls: vec![unsplash("photo-1581092160562-40aa08e78837")],
                presentation_url: None,
            },
            award: Award::None,
            tags: tags(&["Automation", "Industrial", "IoT"]),
            students: vec![
                student("s5", "Carlos Lima", "Robotics Engineer"),
                student("s6", "Elena Gilbert", "Systems Architect"),
            ],
            advisor: "Dr. Sarah Connor".into(),
            partner: Some("WEG".into()),
        },
        Project {
            id: ProjectId::new("4"),
            title: "Smart City Mesh".into(),
            description: "Low-latency connectivity network for urban logistics.".into(),
            long_description: "A robust mesh networking solution designed for high-density urban environments.".into(),
            category: Category::Software,
            semester: Semester::Second,
            year: 2022,
            media: Media {
                thumbnail_url: unsplash("photo-1519389950473-47ba0277781c"),
                video_url: None,
                gallery_urls: vec![unsplash("photo-1519389950473-47ba0277781c")],
                presentation_url: None,
            },
            award: Award::None,
            tags: tags(&["Networking", "Logistics", "Cloud"]),
            students: vec![student("s7", "Lucas Ferreira", "Network Engineer")],
            advisor: "Prof. James Watt".into(),
            partner: Some("TATA".into()),
        },
        Project {
            id: ProjectId::new("5"),
            title: "BioSentry Monitoring".into(),
            description: "Wearable health patch for continuous glucose monitoring.".into(),
            long_description: "A non-invasive approach to monitoring blood sugar levels using interstitial fluid analysis.".into(),
            category: Category::HardwareIot,
            semester: Semester::First,
            year: 2023,
            media: Media {
                thumbnail_url: unsplash("photo-1576091160550-2173dba999ef"),
                video_url: None,
                gallery_urls: vec![unsplash("photo-1576091160550-2173dba999ef")],
                presentation_url: None,
            },
            award: Award::Excellence,
            tags: tags(&["HealthTech", "Biotech", "Wearables"]),
            students: vec![student("s8", "Gabriel Mendes", "Biomedical Engineer")],
            advisor: "Dr. House".into(),
            partner: Some("Siemens".into()),
        },
        Project {
            id: ProjectId::new("6"),
            title: "Autonomous Drone Swarm".into(),
            description: "Coordinated flight systems for search and rescue operations.".into(),
            long_description: "Drones that communicate with each other to map disaster zones 10x faster than traditional methods.".into(),
            category: Category::Robotics,
            semester: Semester::Second,
            year: 2024,
            media: Media {
                thumbnail_url: unsplash("photo-1508614589041-895b88991e3e"),
                video_url: None,
                gallery_urls: vec![unsplash("photo-1508614589041-895b88991e3e")],
                presentation_url: None,
            },
            award: Award::Featured,
            tags: tags(&["Drones", "AI", "Rescue"]),
            students: vec![student("s9", "Sofia Oliveira", "Robotics Lead")],
            advisor: "Prof. Xavier".into(),
            partner: Some("Embraer".into()),
        },
        Project {
            id: ProjectId::new("7"),
            title: "Quantum Ledger".into(),
            description: "Post-quantum cryptography for financial systems.".into(),
            long_description: "Securing the future of banking against quantum computing threats.".into(),
            category: Category::Software,
            semester: Semester::First,
            year: 2022,
            media: Media {
                thumbnail_url: unsplash("photo-1639762681485-074b7f938ba0"),
                video_url: None,
                gallery_urls: vec![unsplash("photo-1639762681485-074b7f938ba0")],
                presentation_url: None,
            },
            award: Award::None,
            tags: tags(&["Crypto", "Security", "Fintech"]),
            students: vec![student("s10", "Arthur Lima", "Security Analyst")],
            advisor: "Dr. Satoshi".into(),
            partner: Some("BTG Pactual".into()),
        },
        Project {
            id: ProjectId::new("8"),
            title: "Urban Hydroponics".into(),
            description: "Fully automated vertical farming for dense cities.".into(),
            long_description: "Feeding the future with low-water, high-yield vertical systems.".into(),
            category: Category::UxUi,
            semester: Semester::Second,
            year: 2023,
            media: Media {
                thumbnail_url: unsplash("photo-1558449028-b53a39d100fc"),
                video_url: None,
                gallery_urls: vec![unsplash("photo-1558449028-b53a39d100fc")],
                presentation_url: None,
            },
            award: Award::Excellence,
            tags: tags(&["AgroTech", "Design", "Sustainability"]),
            students: vec![student("s11", "Mariana Duarte", "Product Designer")],
            advisor: "Prof. Gaia".into(),
            partner: Some("Natura".into()),
        },
    ]
}
