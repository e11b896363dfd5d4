//! Requirement to OWASP Top 10 (2025) mapping table.
//!
//! Entries are kept in authored order: grouping takes each risk area's
//! level from its first member and lists test focus in member order.

use super::{RequirementMapping, RiskLevel};

/// OWASP Top 10 2025 categories.
pub const OWASP_TOP_10_2025: &[(&str, &str)] = &[
    ("A01", "Broken Access Control"),
    ("A02", "Security Misconfiguration"),
    ("A03", "Software Supply Chain Failures"),
    ("A04", "Cryptographic Failures"),
    ("A05", "Injection"),
    ("A06", "Insecure Design"),
    ("A07", "Authentication Failures"),
    ("A08", "Software or Data Integrity Failures"),
    ("A09", "Logging & Alerting Failures"),
    ("A10", "Mishandling of Exceptional Conditions"),
];

/// The e-commerce requirement set (REQ-001 to REQ-027).
pub const REQUIREMENT_MAPPINGS: &[RequirementMapping] = &[
    RequirementMapping {
        id: "REQ-014",
        name: "Valid Login",
        owasp: &["A07", "A01"],
        description: "Users can log in with valid credentials",
        risk_area: "Authentication & Authorization",
        risk_level: RiskLevel::Critical,
        test_focus: "Credential validation, session management, token generation",
    },
    RequirementMapping {
        id: "REQ-015",
        name: "Invalid Login Handling",
        owasp: &["A07"],
        description: "Invalid login attempts are properly handled",
        risk_area: "Authentication & Authorization",
        risk_level: RiskLevel::Critical,
        test_focus: "Brute force protection, error messages, rate limiting",
    },
    RequirementMapping {
        id: "REQ-013",
        name: "Login Redirect",
        owasp: &["A07", "A01"],
        description: "User is redirected to login when accessing protected resources",
        risk_area: "Authentication & Authorization",
        risk_level: RiskLevel::Critical,
        test_focus: "Access control, authentication verification, session validation",
    },
    RequirementMapping {
        id: "REQ-016",
        name: "Protected Page Redirect",
        owasp: &["A01"],
        description: "Protected pages redirect to login for unauthorized users",
        risk_area: "Broken Access Control",
        risk_level: RiskLevel::Critical,
        test_focus: "Authorization checks, access enforcement",
    },
    RequirementMapping {
        id: "REQ-022",
        name: "Admin Portal Access",
        owasp: &["A01"],
        description: "Authorized admins can access admin portal",
        risk_area: "Broken Access Control",
        risk_level: RiskLevel::Critical,
        test_focus: "Role-based access control, privilege verification",
    },
    RequirementMapping {
        id: "REQ-023",
        name: "Admin Access Restriction",
        owasp: &["A01"],
        description: "Non-admin users cannot access admin functions",
        risk_area: "Broken Access Control",
        risk_level: RiskLevel::Critical,
        test_focus: "Access denial, privilege elevation prevention",
    },
    RequirementMapping {
        id: "REQ-024",
        name: "Product Creation",
        owasp: &["A01", "A06"],
        description: "Admin can create new products",
        risk_area: "Access Control & Business Logic",
        risk_level: RiskLevel::High,
        test_focus: "Authorization, input validation, business logic",
    },
    RequirementMapping {
        id: "REQ-025",
        name: "Product Update",
        owasp: &["A01", "A06"],
        description: "Admin can update product information",
        risk_area: "Access Control & Business Logic",
        risk_level: RiskLevel::High,
        test_focus: "Authorization, data integrity, input validation",
    },
    RequirementMapping {
        id: "REQ-026",
        name: "Product Deletion",
        owasp: &["A01", "A06"],
        description: "Admin can delete products",
        risk_area: "Access Control & Business Logic",
        risk_level: RiskLevel::High,
        test_focus: "Authorization, data integrity, transaction management",
    },
    RequirementMapping {
        id: "REQ-010",
        name: "Temporary Cart Storage",
        owasp: &["A01", "A04"],
        description: "Anonymous users' cart data is stored temporarily",
        risk_area: "Session Management & Cryptography",
        risk_level: RiskLevel::High,
        test_focus: "Session storage, data encryption, confidentiality",
    },
    RequirementMapping {
        id: "REQ-011",
        name: "Temporary Cart Retention",
        owasp: &["A01"],
        description: "Temporary cart data is retained until customer login",
        risk_area: "Session Management",
        risk_level: RiskLevel::Medium,
        test_focus: "Session timeout, data retention policies",
    },
    RequirementMapping {
        id: "REQ-017",
        name: "Cart Persistence",
        owasp: &["A01", "A04"],
        description: "Logged-in user cart persists across sessions",
        risk_area: "Session Management & Data Protection",
        risk_level: RiskLevel::High,
        test_focus: "Data encryption, session security, access control",
    },
    RequirementMapping {
        id: "REQ-018",
        name: "Cart Restore",
        owasp: &["A01"],
        description: "Temporary cart is restored to user's persistent cart",
        risk_area: "Access Control & Data Integrity",
        risk_level: RiskLevel::Medium,
        test_focus: "Data merge, transaction integrity",
    },
    RequirementMapping {
        id: "REQ-019",
        name: "Checkout Processing",
        owasp: &["A01", "A04", "A06"],
        description: "System processes checkout and payment",
        risk_area: "Payment Processing & Security",
        risk_level: RiskLevel::Critical,
        test_focus: "Payment verification, encryption, authorization, fraud prevention",
    },
    RequirementMapping {
        id: "REQ-020",
        name: "Order Confirmation",
        owasp: &["A01", "A04"],
        description: "Order confirmation is provided after successful payment",
        risk_area: "Transaction Integrity & Access Control",
        risk_level: RiskLevel::Critical,
        test_focus: "Data integrity, authorization, email security",
    },
    RequirementMapping {
        id: "REQ-021",
        name: "Order Tracking View",
        owasp: &["A01"],
        description: "Users can only view their own orders",
        risk_area: "Broken Access Control",
        risk_level: RiskLevel::Critical,
        test_focus: "Authorization, object-level access control, data filtering",
    },
    RequirementMapping {
        id: "REQ-012",
        name: "Customer Home Access",
        owasp: &["A01", "A07"],
        description: "Authenticated customers can access their home page",
        risk_area: "Authentication & Access Control",
        risk_level: RiskLevel::High,
        test_focus: "Authentication verification, session validation",
    },
    RequirementMapping {
        id: "REQ-027",
        name: "User Account Management",
        owasp: &["A07", "A01"],
        description: "Users can manage their account settings",
        risk_area: "Authentication & Access Control",
        risk_level: RiskLevel::High,
        test_focus: "Authorization, profile updates, credential protection",
    },
    RequirementMapping {
        id: "REQ-001",
        name: "Homepage Access",
        owasp: &["A01", "A02"],
        description: "Homepage is accessible to all users",
        risk_area: "Access Control & Configuration",
        risk_level: RiskLevel::Medium,
        test_focus: "Public resource access, proper configuration",
    },
    RequirementMapping {
        id: "REQ-002",
        name: "Logo Redirect",
        owasp: &["A06"],
        description: "Logo click redirects to homepage",
        risk_area: "Business Logic",
        risk_level: RiskLevel::Low,
        test_focus: "Navigation, functionality",
    },
    RequirementMapping {
        id: "REQ-003",
        name: "Anonymous Access",
        owasp: &["A01", "A02"],
        description: "Anonymous users can browse without login",
        risk_area: "Access Control & Configuration",
        risk_level: RiskLevel::Medium,
        test_focus: "Public access, proper authorization checks",
    },
    RequirementMapping {
        id: "REQ-004",
        name: "Category Filtering",
        owasp: &["A06", "A05"],
        description: "Products can be filtered by category",
        risk_area: "Business Logic & Input Validation",
        risk_level: RiskLevel::Medium,
        test_focus: "Input validation, SQL injection prevention, business logic",
    },
    RequirementMapping {
        id: "REQ-005",
        name: "Clear Category Filter",
        owasp: &["A06"],
        description: "Category filter can be cleared",
        risk_area: "Business Logic",
        risk_level: RiskLevel::Low,
        test_focus: "State management, functionality",
    },
    RequirementMapping {
        id: "REQ-006",
        name: "Empty Category Result",
        owasp: &["A06", "A10"],
        description: "Empty results are handled gracefully",
        risk_area: "Error Handling & Business Logic",
        risk_level: RiskLevel::Medium,
        test_focus: "Exception handling, user feedback",
    },
    RequirementMapping {
        id: "REQ-007",
        name: "Product Details Access",
        owasp: &["A01", "A06"],
        description: "Product details are accessible",
        risk_area: "Access Control & Business Logic",
        risk_level: RiskLevel::Medium,
        test_focus: "Authorization, product access",
    },
    RequirementMapping {
        id: "REQ-008",
        name: "Product Information Display",
        owasp: &["A02", "A06"],
        description: "Product information is correctly displayed",
        risk_area: "Configuration & Business Logic",
        risk_level: RiskLevel::Medium,
        test_focus: "Data accuracy, presentation",
    },
    RequirementMapping {
        id: "REQ-009",
        name: "Product Data Accuracy",
        owasp: &["A06"],
        description: "Product data is accurate and consistent",
        risk_area: "Data Integrity & Business Logic",
        risk_level: RiskLevel::High,
        test_focus: "Data validation, consistency, accuracy",
    },
];
