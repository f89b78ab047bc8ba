//! Contact page generation

use maud::{Markup, html};

use super::{page_intro, page_meta, section};
use crate::components::layout::base_layout;
use crate::config::SiteConfig;

pub const PATH: &str = "/contact";
pub const TITLE: &str = "Contact";
pub const DESCRIPTION: &str =
    "Get in touch for opportunities, collaborations, and technical discussions.";

/// Generates the contact page with a static message form.
pub fn generate(site: &SiteConfig) -> Markup {
    let page = page_meta(site, PATH, TITLE, DESCRIPTION);

    base_layout(
        site,
        PATH,
        &page,
        html! {},
        html! {
            (page_intro("Contact", "Professional contact information and form coming soon..."))
            (section("contact-methods", "Get In Touch", html! {
                p { "Preferred ways to reach me coming soon..." }
            }))
            (section("contact-form", "Send a Message", html! {
                form class="contact-form" method="post" action="#" {
                    label for="contact-name" { "Name" }
                    input type="text" id="contact-name" name="name" required;
                    label for="contact-email" { "Email" }
                    input type="email" id="contact-email" name="email" required;
                    label for="contact-message" { "Message" }
                    textarea id="contact-message" name="message" rows="5" required {}
                    button type="submit" { "Send" }
                }
            }))
            (section("availability", "Availability", html! {
                p { "Current availability coming soon..." }
            }))
            (section("social-links", "Connect", html! {
                p { "Social profiles coming soon..." }
            }))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_page() {
        // Arrange
        let site = SiteConfig::default();

        // Act
        let html = generate(&site).into_string();

        // Assert
        assert!(html.contains("<title>Contact - AakerDev</title>"));
        assert!(html.contains("Get in touch for opportunities, collaborations"));
        assert!(html.contains("Professional contact information and form coming soon..."));
        for heading in ["Get In Touch", "Send a Message", "Availability", "Connect"] {
            assert!(html.contains(heading), "Should contain {}", heading);
        }
        for id in ["contact-methods", "contact-form", "availability", "social-links"] {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "Missing section {}", id);
        }
        assert!(html.contains("<form"));
        assert!(html.contains(r#"class="nav-link active" aria-current="page">Contact"#));
    }
}
