//! Built-in starter configurations offered to clients

use serde::Serialize;

/// A named, ready-to-edit YAML document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub yaml: &'static str,
}

const NODE_APP_YAML: &str = "version: 1.0
services:
  app:
    compute:
      instance: basic
      memory: 1GB
    scaling:
      min: 1
      max: 3
    environment:
      NODE_ENV: production";

const PYTHON_WEB_APP_YAML: &str = "version: 1.0
services:
  web:
    compute:
      instance: basic
      memory: 2GB
    scaling:
      min: 2
      max: 5
    environment:
      PYTHON_ENV: production

  database:
    type: postgresql
    version: 13
    storage: 10GB";

static TEMPLATES: [Template; 2] = [
    Template {
        name: "Node.js App",
        description: "Basic Node.js application with auto-scaling",
        yaml: NODE_APP_YAML,
    },
    Template {
        name: "Python Web App",
        description: "Python web application with PostgreSQL",
        yaml: PYTHON_WEB_APP_YAML,
    },
];

/// Every template, in display order
pub fn all() -> &'static [Template] {
    &TEMPLATES
}
