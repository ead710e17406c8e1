//! Authored scenario templates keyed by skill and difficulty.
//!
//! The catalog is the curated half of quiz assembly. Skills or difficulty
//! tiers with no authored templates fall through to synthesized questions
//! in [`crate::assembler`].

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::category::QuestionCategory;
use crate::difficulty::Difficulty;
use crate::record::AnswerKey;

/// One authored scenario. All text is borrowed for the life of the process
/// so assembly copies cheaply.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioTemplate {
    pub category: QuestionCategory,
    pub scenario: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct: AnswerKey,
    pub explanation: &'static str,
}

static SQL_BEGINNER: [ScenarioTemplate; 10] = [
    ScenarioTemplate {
        category: QuestionCategory::ConceptApplication,
        scenario: "You are analyzing sales data for a retail store. The manager wants to see total revenue for each product category, but only for orders placed in the last 30 days. The database has orders table with order_date, product_id, amount and products table with product_id, category.",
        question: "Which SQL approach would best solve this requirement?",
        options: [
            "SELECT category, SUM(amount) FROM orders o JOIN products p ON o.product_id = p.product_id WHERE order_date >= DATE_SUB(CURRENT_DATE, INTERVAL 30 DAY) GROUP BY category",
            "SELECT category, COUNT(*) FROM orders o JOIN products p ON o.product_id = p.product_id WHERE order_date >= DATE_SUB(CURRENT_DATE, INTERVAL 30 DAY) GROUP BY category",
            "SELECT category, amount FROM orders o JOIN products p ON o.product_id = p.product_id WHERE order_date >= DATE_SUB(CURRENT_DATE, INTERVAL 30 DAY)",
            "SELECT SUM(amount) FROM orders WHERE order_date >= DATE_SUB(CURRENT_DATE, INTERVAL 30 DAY)",
        ],
        correct: AnswerKey::A,
        explanation: "Correct approach uses JOIN, SUM aggregation, proper date filtering, and GROUP BY to get revenue by category.",
    },
    ScenarioTemplate {
        category: QuestionCategory::Debugging,
        scenario: "A junior developer wrote this query to find customers who placed orders: SELECT customer_name FROM customers WHERE customer_id IN (SELECT customer_id FROM orders). The query returns duplicate customer names when customers have multiple orders.",
        question: "What is the best fix for this issue?",
        options: [
            "Add DISTINCT to remove duplicates: SELECT DISTINCT customer_name FROM customers WHERE customer_id IN (SELECT customer_id FROM orders)",
            "Use JOIN instead of subquery: SELECT DISTINCT c.customer_name FROM customers c JOIN orders o ON c.customer_id = o.customer_id",
            "Add GROUP BY: SELECT customer_name FROM customers WHERE customer_id IN (SELECT customer_id FROM orders) GROUP BY customer_name",
            "Use EXISTS instead of IN: SELECT customer_name FROM customers c WHERE EXISTS (SELECT 1 FROM orders o WHERE o.customer_id = c.customer_id)",
        ],
        correct: AnswerKey::A,
        explanation: "DISTINCT is the simplest and most direct solution to remove duplicate customer names from the result set.",
    },
    ScenarioTemplate {
        category: QuestionCategory::PerformanceOptimization,
        scenario: "Your e-commerce database has 1 million orders. The query SELECT * FROM orders WHERE order_date BETWEEN '2023-01-01' AND '2023-12-31' takes 45 seconds to run. The order_date column has no index.",
        question: "What is the most effective optimization?",
        options: [
            "Create an index on the order_date column",
            "Change the query to use >= and <= instead of BETWEEN",
            "Add LIMIT 1000 to reduce result set size",
            "Use SELECT only specific columns instead of *",
        ],
        correct: AnswerKey::A,
        explanation: "Creating an index on order_date will dramatically improve query performance for date range queries.",
    },
    ScenarioTemplate {
        category: QuestionCategory::DecisionMaking,
        scenario: "You need to implement a user authentication system. The requirements are: store user credentials, handle login attempts, track failed logins, and lock accounts after 5 failed attempts. You must decide between storing login attempts in a separate table or adding a column to the users table.",
        question: "Which approach is more scalable and maintainable?",
        options: [
            "Create a separate login_attempts table with user_id, timestamp, success columns",
            "Add failed_attempts and last_attempt columns to users table",
            "Store login attempts as JSON in a text column in users table",
            "Use a single audit table that logs all user activities",
        ],
        correct: AnswerKey::A,
        explanation: "Separate login_attempts table provides better scalability, allows detailed tracking, and follows normalization principles.",
    },
    ScenarioTemplate {
        category: QuestionCategory::BestPractices,
        scenario: "You are designing a database for a hospital patient management system. The system needs to store patient appointments, medical records, and billing information. Some requirements conflict: doctors want quick access to patient history, while auditors need detailed change tracking.",
        question: "What database design best practice should you prioritize?",
        options: [
            "Normalize the database and create views for different user roles",
            "Denormalize for performance and create triggers for audit logging",
            "Create separate databases for operational and reporting needs",
            "Use a single flat table with all required fields for simplicity",
        ],
        correct: AnswerKey::A,
        explanation: "Normalization ensures data integrity, while views provide role-specific access without duplicating data.",
    },
    ScenarioTemplate {
        category: QuestionCategory::EdgeCases,
        scenario: "Your application processes financial transactions. You need to calculate the average transaction amount per customer, but some customers have zero transactions and should be excluded from the average calculation to avoid skewing results.",
        question: "How would you handle this edge case in SQL?",
        options: [
            "SELECT customer_id, AVG(amount) FROM transactions WHERE amount > 0 GROUP BY customer_id",
            "SELECT customer_id, SUM(amount)/COUNT(amount) FROM transactions GROUP BY customer_id HAVING COUNT(*) > 0",
            "SELECT customer_id, AVG(CASE WHEN amount > 0 THEN amount END) FROM transactions GROUP BY customer_id",
            "SELECT customer_id, AVG(amount) FROM transactions GROUP BY customer_id",
        ],
        correct: AnswerKey::C,
        explanation: "CASE WHEN handles the edge case by excluding zero amounts from the average calculation while still including customers in the result.",
    },
    ScenarioTemplate {
        category: QuestionCategory::Security,
        scenario: "You are building a public-facing web application that accepts user input for search functionality. The search query is directly embedded into an SQL statement: 'SELECT * FROM products WHERE name LIKE \\'' + user_input + '\\''",
        question: "What security vulnerability exists and how do you fix it?",
        options: [
            "SQL injection vulnerability - use parameterized queries",
            "XSS vulnerability - sanitize HTML output",
            "Performance issue - add database indexes",
            "Data type mismatch - cast user input to string",
        ],
        correct: AnswerKey::A,
        explanation: "Direct string concatenation creates SQL injection vulnerability. Parameterized queries prevent this by separating code from data.",
    },
    ScenarioTemplate {
        category: QuestionCategory::OutputPrediction,
        scenario: "Given a table employees with columns id, name, salary, department_id and departments with id, name. You run: SELECT d.name, AVG(e.salary) as avg_salary FROM departments d LEFT JOIN employees e ON d.id = e.department_id GROUP BY d.name ORDER BY avg_salary DESC NULLS LAST.",
        question: "What will departments with no employees show in the result?",
        options: [
            "Department name with avg_salary as NULL",
            "Department name with avg_salary as 0",
            "Department will not appear in results",
            "Department name with avg_salary as empty string",
        ],
        correct: AnswerKey::A,
        explanation: "LEFT JOIN includes all departments, and AVG of NULL values returns NULL for departments with no employees.",
    },
    ScenarioTemplate {
        category: QuestionCategory::ToolSelection,
        scenario: "Your team needs to analyze customer behavior patterns from clickstream data. The data volume is 10GB per day with complex nested JSON structures. You need to run ad-hoc analytical queries with sub-second response times.",
        question: "Which database technology is most suitable?",
        options: [
            "PostgreSQL with JSONB support and proper indexing",
            "MongoDB with aggregation pipeline",
            "Elasticsearch with analytical capabilities",
            "Traditional relational database with text columns",
        ],
        correct: AnswerKey::A,
        explanation: "PostgreSQL with JSONB provides strong consistency, complex querying, and excellent performance for structured JSON analysis.",
    },
    ScenarioTemplate {
        category: QuestionCategory::TradeOffAnalysis,
        scenario: "You are designing an inventory management system. The business requires real-time stock updates across 100 stores, but also needs historical analysis capabilities. You must choose between eventual consistency (faster writes) and strong consistency (slower but accurate reads).",
        question: "What trade-off decision best serves the business needs?",
        options: [
            "Use strong consistency for inventory, separate analytics database for historical data",
            "Use eventual consistency everywhere, accept temporary stock inaccuracies",
            "Use strong consistency for writes, cache reads for performance",
            "Use hybrid approach: strong for critical items, eventual for bulk inventory",
        ],
        correct: AnswerKey::A,
        explanation: "Strong consistency ensures accurate inventory management, while a separate analytics database handles historical reporting without impacting real-time operations.",
    },
];

/// Uppercase skill name to per-difficulty template sets.
/// This map is initialized the first time it is accessed.
static CATALOG: LazyLock<HashMap<&'static str, HashMap<Difficulty, &'static [ScenarioTemplate]>>> =
    LazyLock::new(|| {
        HashMap::from([(
            "SQL",
            HashMap::from([(Difficulty::Beginner, &SQL_BEGINNER[..])]),
        )])
    });

/// Authored templates for a skill and difficulty. Returns an empty slice
/// when nothing has been authored for the pair. Lookup expects the skill
/// already normalized to uppercase.
#[must_use]
pub fn templates(skill: &str, difficulty: Difficulty) -> &'static [ScenarioTemplate] {
    CATALOG
        .get(skill)
        .and_then(|by_difficulty| by_difficulty.get(&difficulty))
        .copied()
        .unwrap_or(&[])
}
