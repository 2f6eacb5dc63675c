use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }
    };
}

id_newtype!(ProjectId);
id_newtype!(StudentId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Software,
    HardwareIot,
    Ai,
    UxUi,
    Robotics,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Software => "Software Engineering",
            Category::HardwareIot => "Hardware & IoT",
            Category::Ai => "Artificial Intelligence",
            Category::UxUi => "UX/UI Design",
            Category::Robotics => "Robotics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub fn number(self) -> u8 {
        match self {
            Semester::First => 1,
            Semester::Second => 2,
        }
    }
}

/// Distinction a project received at the showcase. `None` means the project is not on the
/// Wall of Fame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Award {
    #[default]
    None,
    Featured,
    Excellence,
}

impl Award {
    pub fn is_awarded(self) -> bool {
        self != Award::None
    }

    pub fn label(self) -> &'static str {
        match self {
            Award::None => "None",
            Award::Featured => "Falconi Featured Project",
            Award::Excellence => "Falconi Excellence Project",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Media {
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub gallery_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub category: Category,
    pub semester: Semester,
    pub year: i32,
    pub media: Media,
    #[serde(default)]
    pub award: Award,
    pub tags: Vec<String>,
    pub students: Vec<Student>,
    pub advisor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
}

impl Project {
    /// Semester in the kiosk's `YEAR.SEM` notation, e.g. `2024.1`.
    pub fn semester_label(&self) -> String {
        format!("{}.{}", self.year, self.semester.number())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_awarded(&self) -> bool {
        self.award.is_awarded()
    }
}
