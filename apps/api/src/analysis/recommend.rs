//! Track-keyed skill and course recommendations.
//!
//! Static tables keyed by the predicted track label. Tracks without a table
//! (e.g. Cloud/DevOps, General Software) get an empty recommendation rather
//! than a wrong one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendation {
    pub skills: Vec<String>,
    pub courses: Vec<Course>,
}

const DS_SKILLS: &[&str] = &[
    "Data Visualization", "Predictive Analysis", "Statistical Modeling", "Data Mining",
    "Clustering & Classification", "Data Analytics", "Quantitative Analysis", "Web Scraping",
    "ML Algorithms", "Keras", "Pytorch", "Probability", "Scikit-learn", "Tensorflow", "Flask",
    "Streamlit",
];
const DS_COURSES: &[(&str, &str)] = &[
    ("Intro to Machine Learning", "https://www.coursera.org/learn/machine-learning"),
    ("Deep Learning Specialization", "https://www.coursera.org/specializations/deep-learning"),
    (
        "Hands-on ML with Scikit-Learn",
        "https://learning.oreilly.com/library/view/hands-on-machine-learning/9781492032632/",
    ),
];

const WEB_SKILLS: &[&str] = &[
    "React", "Django", "Node JS", "React JS", "PHP", "Laravel", "Magento", "WordPress",
    "JavaScript", "Angular", "C#", "Flask", "SDK",
];
const WEB_COURSES: &[(&str, &str)] = &[
    ("The Odin Project: Full-Stack JS", "https://www.theodinproject.com/"),
    (
        "Meta Front-End Developer",
        "https://www.coursera.org/professional-certificates/meta-front-end-developer",
    ),
    ("Django for Everybody", "https://www.coursera.org/specializations/django"),
];

const ANDROID_SKILLS: &[&str] = &[
    "Android", "Flutter", "Kotlin", "XML", "Java", "Kivy", "Git", "SDK", "SQLite",
];
const ANDROID_COURSES: &[(&str, &str)] = &[
    (
        "Android Basics with Compose",
        "https://developer.android.com/courses/android-basics-compose/course",
    ),
    ("Kotlin for Android Developers", "https://kotlinlang.org/docs/android-overview.html"),
];

const IOS_SKILLS: &[&str] = &[
    "Swift", "Cocoa", "Cocoa Touch", "Xcode", "Objective-C", "SQLite", "StoreKit", "UIKit",
    "AVFoundation", "Auto Layout",
];
const IOS_COURSES: &[(&str, &str)] = &[
    ("Stanford iOS CS193p", "https://cs193p.sites.stanford.edu/"),
    ("Hacking with Swift", "https://www.hackingwithswift.com/100"),
];

const UIUX_SKILLS: &[&str] = &[
    "User Experience", "Adobe XD", "Figma", "Zeplin", "Balsamiq", "Prototyping", "Wireframes",
    "Storyboards", "Photoshop", "Illustrator", "After Effects", "Premiere Pro", "InDesign",
    "User Research",
];
const UIUX_COURSES: &[(&str, &str)] = &[
    (
        "Google UX Design",
        "https://www.coursera.org/professional-certificates/google-ux-design",
    ),
    ("Figma for UX/UI", "https://www.figma.com/resources/learn-design/"),
];

/// Recommendations for a predicted track. Accepts the labels of both track
/// strategies (map-driven and legacy); unknown labels yield an empty
/// recommendation.
pub fn recommendations_for(track: &str) -> Recommendation {
    let (skills, courses) = match track {
        "Data Science" | "Data Science / ML" | "AI/ML" => (DS_SKILLS, DS_COURSES),
        "Web Development" => (WEB_SKILLS, WEB_COURSES),
        "Mobile" | "Android Development" => (ANDROID_SKILLS, ANDROID_COURSES),
        "iOS Development" => (IOS_SKILLS, IOS_COURSES),
        "UI/UX" | "UI/UX Development" => (UIUX_SKILLS, UIUX_COURSES),
        _ => return Recommendation::default(),
    };
    Recommendation {
        skills: skills.iter().map(|s| s.to_string()).collect(),
        courses: courses
            .iter()
            .map(|(title, url)| Course {
                title: title.to_string(),
                url: url.to_string(),
            })
            .collect(),
    }
}
