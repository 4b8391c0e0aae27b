use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    #[default]
    Python,
    JavaScript,
    TypeScript,
    Cpp,
    C,
    CSharp,
    Java,
    Ruby,
    Go,
    Rust,
    Php,
    Swift,
    Kotlin,
    Html,
    Css,
    Json,
}

impl LanguageId {
    pub const ALL: [LanguageId; 16] = [
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::Cpp,
        Self::C,
        Self::CSharp,
        Self::Java,
        Self::Ruby,
        Self::Go,
        Self::Rust,
        Self::Php,
        Self::Swift,
        Self::Kotlin,
        Self::Html,
        Self::Css,
        Self::Json,
    ];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "py" => Some(Self::Python),
            "js" => Some(Self::JavaScript),
            "ts" => Some(Self::TypeScript),
            "cpp" => Some(Self::Cpp),
            "c" => Some(Self::C),
            "cs" => Some(Self::CSharp),
            "java" => Some(Self::Java),
            "rb" => Some(Self::Ruby),
            "go" => Some(Self::Go),
            "rs" => Some(Self::Rust),
            "php" => Some(Self::Php),
            "swift" => Some(Self::Swift),
            "kt" => Some(Self::Kotlin),
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Language for a new file called `name`; unknown or missing extensions
    /// fall back to the default language.
    pub fn for_file_name(name: &str) -> Self {
        name.rsplit_once('.')
            .and_then(|(_, ext)| Self::from_extension(ext))
            .unwrap_or_default()
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.token() == token)
    }

    /// Token handed to the editor widget and the execution service.
    pub fn token(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::CSharp => "csharp",
            Self::Java => "java",
            Self::Ruby => "ruby",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Php => "php",
            Self::Swift => "swift",
            Self::Kotlin => "kotlin",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Cpp => "C++",
            Self::C => "C",
            Self::CSharp => "C#",
            Self::Java => "Java",
            Self::Ruby => "Ruby",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Php => "PHP",
            Self::Swift => "Swift",
            Self::Kotlin => "Kotlin",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Json => "JSON",
        }
    }

    /// Sandbox language id, `None` for languages it cannot run.
    pub fn sandbox_id(self) -> Option<u32> {
        match self {
            Self::Python => Some(71),
            Self::JavaScript => Some(63),
            Self::Cpp => Some(54),
            Self::Java => Some(62),
            Self::C => Some(50),
            Self::CSharp => Some(51),
            Self::Ruby => Some(72),
            Self::Go => Some(60),
            Self::Rust => Some(73),
            Self::Php => Some(68),
            Self::Swift => Some(83),
            Self::Kotlin => Some(78),
            Self::TypeScript | Self::Html | Self::Css | Self::Json => None,
        }
    }

    /// Starter program shown for a fresh file in this language.
    pub fn starter_snippet(self) -> &'static str {
        match self {
            Self::Python => "# Write your Python code here\nprint('Hello, Bharat!')",
            Self::JavaScript => "// Write your JavaScript code here\nconsole.log('Hello, Bharat!');",
            Self::Cpp => "// Write your C++ code here\n#include <iostream>\nusing namespace std;\n\nint main() {\n    cout << \"Hello, Bharat!\" << endl;\n    return 0;\n}",
            Self::Java => "// Write your Java code here\npublic class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, Bharat!\");\n    }\n}",
            _ => "",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
