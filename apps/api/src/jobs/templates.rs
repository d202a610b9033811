//! Role templates the seeder rotates through.

use crate::models::job::JobRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTemplate {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
}

pub static ROLE_TEMPLATES: [RoleTemplate; 10] = [
    RoleTemplate { title: "Software Engineer", company: "TechCorp", location: "San Francisco, CA" },
    RoleTemplate { title: "Frontend Developer", company: "WebSolutions", location: "New York, NY" },
    RoleTemplate { title: "Backend Developer", company: "DataSystems", location: "Austin, TX" },
    RoleTemplate { title: "Full Stack Developer", company: "StartupInc", location: "Seattle, WA" },
    RoleTemplate { title: "DevOps Engineer", company: "CloudTech", location: "Remote" },
    RoleTemplate { title: "Data Scientist", company: "AILabs", location: "Boston, MA" },
    RoleTemplate { title: "Product Manager", company: "InnovateCorp", location: "Los Angeles, CA" },
    RoleTemplate { title: "UX Designer", company: "DesignStudio", location: "Chicago, IL" },
    RoleTemplate { title: "QA Engineer", company: "QualityFirst", location: "Denver, CO" },
    RoleTemplate { title: "Mobile Developer", company: "AppBuilder", location: "Miami, FL" },
];

pub const GENERIC_REQUIREMENTS: &str =
    "Relevant experience and strong problem-solving skills required.";

/// Template for the `index`-th content item (round-robin).
pub fn template_for(index: usize) -> &'static RoleTemplate {
    &ROLE_TEMPLATES[index % ROLE_TEMPLATES.len()]
}

pub fn requirements_for_role(title: &str) -> &'static str {
    match title {
        "Software Engineer" => "Bachelor's degree in Computer Science or related field. 3+ years of experience with Python, Java, or C++. Experience with cloud platforms and databases.",
        "Frontend Developer" => "Strong experience with React, JavaScript, HTML5, CSS3. Knowledge of modern frontend tools and frameworks. Experience with responsive design.",
        "Backend Developer" => "Proficiency in server-side languages (Python, Node.js, Java). Experience with REST APIs, databases, and cloud services.",
        "Full Stack Developer" => "Experience with both frontend (React, Vue) and backend (Node.js, Python) technologies. Knowledge of databases and cloud platforms.",
        "DevOps Engineer" => "Experience with CI/CD pipelines, Docker, Kubernetes. Knowledge of AWS/Azure/GCP. Infrastructure as code experience.",
        "Data Scientist" => "Strong background in Python, R, SQL. Experience with machine learning frameworks. Statistical analysis and data visualization skills.",
        "Product Manager" => "5+ years of product management experience. Strong analytical and communication skills. Experience with agile methodologies.",
        "UX Designer" => "Portfolio demonstrating user-centered design. Proficiency in design tools (Figma, Sketch). User research experience.",
        "QA Engineer" => "Experience with automated testing frameworks. Knowledge of testing methodologies. Programming skills in Python or Java.",
        "Mobile Developer" => "Experience with React Native, Flutter, or native iOS/Android development. App store publishing experience.",
        _ => GENERIC_REQUIREMENTS,
    }
}

impl RoleTemplate {
    /// Synthesizes a job posting for this slot around an upstream content body.
    pub fn to_job(&self, body: &str) -> JobRow {
        JobRow::new(
            self.title,
            self.company,
            self.location,
            self.description(body),
            requirements_for_role(self.title),
        )
    }

    fn description(&self, body: &str) -> String {
        format!(
            "We are looking for a talented {title} to join our growing team at {company}.\n\n\
             About the role:\n{body}\n\n\
             Key Responsibilities:\n\
             • Develop and maintain high-quality software solutions\n\
             • Collaborate with cross-functional teams\n\
             • Participate in code reviews and technical discussions\n\
             • Contribute to architectural decisions",
            title = self.title,
            company = self.company,
            body = body.trim(),
        )
    }
}
