//! Static portfolio data. Everything the site shows (and everything the
//! assistant is allowed to answer from) lives in one `Portfolio` value so
//! it is easy to customize or swap out with a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub dates: String,
    pub image_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub github_url: String,
    pub demo_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: String,
    pub github_username: String,
    pub profile_image: String,
    pub resume_url: String,
    pub social_links: SocialLinks,
    /// Bio paragraphs. Double asterisks mark emphasized phrases.
    pub bio: Vec<String>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Load an alternate profile from a JSON file using the same field
    /// names as the serialized form. Unknown keys are ignored.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile from {}", path.display()))?;
        let portfolio = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse profile from {}", path.display()))?;
        Ok(portfolio)
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            name: "Sai Pradyothan Vitta".to_string(),
            github_username: "saipradyothanvitta".to_string(),
            profile_image: "https://avatars.githubusercontent.com/u/189428240?s=400&u=be0ac2681cbab30ae52a8efc3e8e00c357099c8f&v=4".to_string(),
            resume_url: "https://drive.google.com/file/d/1c1xeslSz8eGbEvxITpfQSlspsrwP_7Zv/view?usp=sharing".to_string(),
            social_links: SocialLinks {
                github: "https://github.com/saipradyothanvitta".to_string(),
                linkedin: "https://www.linkedin.com/in/sai-pradyothan-vitta-2359b9253/".to_string(),
                email: "mailto:vittasaipradyothan@gmail.com".to_string(),
            },
            bio: vec![
                "I'm a passionate and dedicated full-stack developer with a focus on building engaging, performant, and scalable web applications. With a strong foundation in modern web technologies, I love transforming complex problems into elegant, user-friendly solutions.".to_string(),
                "My skills span the entire stack, from designing intuitive frontends with **React** and **Tailwind CSS** to building robust backends with **Node.js** and managing databases like **MongoDB** and **PostgreSQL**.".to_string(),
                "I'm a firm believer in continuous learning and always eager to explore new tools and frameworks to stay at the forefront of technology.".to_string(),
            ],
            education: vec![Education {
                degree: "UG In Computer Science".to_string(),
                institution: "Bennett University (B.Tech)/BU".to_string(),
                dates: "2022-2026 | Pursuing".to_string(),
                image_url: "https://www.reviewadda.com/assets/uploads/college/logo/logo1.png".to_string(),
            }],
            projects: vec![
                Project {
                    id: 1,
                    name: "Crazy-Chat".to_string(),
                    description: "Developed a full-stack, real-time chat application using the MERN stack (React, Node.js, Express) and Socket.IO to implement features like live messaging, typing indicators, and online user counts.".to_string(),
                    tags: vec![
                        "React".to_string(),
                        "Node.js".to_string(),
                        "JavaScript".to_string(),
                        "React.js".to_string(),
                        "Socket.IO".to_string(),
                        "Express.js".to_string(),
                    ],
                    github_url: "https://github.com/saipradyothanvitta/crazy-chat-app".to_string(),
                    demo_url: "https://crazy-chat.netlify.app/".to_string(),
                },
                Project {
                    id: 2,
                    name: "Image-Captioning-Model".to_string(),
                    description: "Developed VisionGPT2, a hybrid image-captioning system that integrates a transformer-based Vision Transformer (ViT) encoder with GPT\u{2011}2 for language generation, enabling coherent, context-aware image descriptions.".to_string(),
                    tags: vec![
                        "Python".to_string(),
                        "Pandas".to_string(),
                        "NumPy".to_string(),
                        "PyTorch".to_string(),
                    ],
                    github_url: "https://github.com/saipradyothanvitta/Image-Captioning-Model-Vision-Transformers-GPT-2-".to_string(),
                    demo_url: "#".to_string(),
                },
                Project {
                    id: 3,
                    name: "Project Three".to_string(),
                    description: "A mobile-first platform for local artists to showcase and sell their work. I built a dynamic gallery, user authentication with social logins, and integrated a payment gateway. This was a great opportunity to explore Next.js and Firebase for a modern, scalable architecture.".to_string(),
                    tags: vec![
                        "Next.js".to_string(),
                        "Firebase".to_string(),
                        "Tailwind CSS".to_string(),
                    ],
                    github_url: "#".to_string(),
                    demo_url: "#".to_string(),
                },
                Project {
                    id: 4,
                    name: "Project Four".to_string(),
                    description: "A collaborative project management tool with real-time updates and task tracking. It features a Kanban board interface, live chat, and user permissions. The backend was built with Express and PostgreSQL to handle complex relational data.".to_string(),
                    tags: vec![
                        "React".to_string(),
                        "Express".to_string(),
                        "PostgreSQL".to_string(),
                    ],
                    github_url: "#".to_string(),
                    demo_url: "#".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_portfolio() {
        let portfolio = Portfolio::default();
        assert_eq!(portfolio.name, "Sai Pradyothan Vitta");
        assert_eq!(portfolio.bio.len(), 3);
        assert_eq!(portfolio.education.len(), 1);
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.projects[0].name, "Crazy-Chat");
    }

    #[test]
    fn test_project_serialization_uses_camel_case() {
        let project = &Portfolio::default().projects[0];
        let json = serde_json::to_value(project).unwrap();
        assert!(json.get("githubUrl").is_some());
        assert!(json.get("demoUrl").is_some());
        assert!(json.get("github_url").is_none());
    }

    #[test]
    fn test_from_path_round_trip() {
        let portfolio = Portfolio::default();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&portfolio).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = Portfolio::from_path(file.path()).unwrap();
        assert_eq!(loaded.name, portfolio.name);
        assert_eq!(loaded.projects.len(), portfolio.projects.len());
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Portfolio::from_path("/nonexistent/profile.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_ignores_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut json = serde_json::to_value(Portfolio::default()).unwrap();
        json["themes"] = serde_json::json!([{"name": "Default"}]);
        file.write_all(json.to_string().as_bytes()).unwrap();

        let loaded = Portfolio::from_path(file.path()).unwrap();
        assert_eq!(loaded.name, "Sai Pradyothan Vitta");
    }
}
