use dioxus::prelude::*;

use flight_co2_common::faq::faq_entries;

use super::accordion::{sections_from, Accordion};

#[component]
pub fn FaqView() -> Element {
    let sections = use_hook(|| sections_from(faq_entries()));

    rsx! {
        div { class: "faq-view",
            Accordion { sections }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::accordion::tests::{count, render_view, ClickableDom};
    use crate::components::accordion::OpenSections;
    use scraper::{Html, Selector};

    fn render_faq() -> Html {
        let mut dom = VirtualDom::new(FaqView);
        dom.rebuild_in_place();
        Html::parse_fragment(&dioxus_ssr::render(&dom))
    }

    #[test]
    fn faq_renders_five_collapsed_entries() {
        let html = render_faq();
        assert_eq!(count(&html, ".faq-view .accordion-section"), 5);
        assert_eq!(count(&html, ".accordion-body"), 0);

        let headers = Selector::parse(".accordion-header").unwrap();
        let last = html.select(&headers).last().unwrap();
        assert!(last.text().collect::<String>().contains("How does the data compare?"));
    }

    #[test]
    fn toggling_last_entry_reveals_and_hides_source_link() {
        let sections = sections_from(faq_entries());
        let last = sections.len() - 1;
        let mut open = OpenSections::default();

        assert!(open.toggle(last, sections.len()));
        let html = render_view(sections.clone(), open.clone());
        let anchors = Selector::parse(".accordion-links a").unwrap();
        let links: Vec<_> = html.select(&anchors).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text().collect::<String>(), "Source");
        assert!(links[0]
            .value()
            .attr("href")
            .unwrap()
            .starts_with("https://www.theguardian.com/environment/"));

        assert!(!open.toggle(last, sections.len()));
        let html = render_view(sections, open);
        assert_eq!(count(&html, ".accordion-links a"), 0);
        assert_eq!(count(&html, ".accordion-body"), 0);
    }

    #[test]
    fn open_update_entry_renders_each_line() {
        let sections = sections_from(faq_entries());
        let mut open = OpenSections::default();
        open.toggle(3, sections.len());
        let html = render_view(sections, open);
        assert_eq!(count(&html, ".accordion-body p"), 4);
    }

    fn source_links(html: &Html) -> Vec<String> {
        let anchors = Selector::parse(".accordion-links a").unwrap();
        html.select(&anchors)
            .map(|a| a.text().collect::<String>())
            .collect()
    }

    #[test]
    fn clicking_last_header_shows_then_hides_source_link() {
        let mut dom = ClickableDom::new(VirtualDom::new(FaqView));
        assert_eq!(dom.header_count(), 5);
        assert!(source_links(&dom.html()).is_empty());

        dom.click(4);
        let html = dom.html();
        assert_eq!(source_links(&html), vec!["Source"]);
        assert_eq!(count(&html, ".accordion-body"), 1);

        dom.click(4);
        let html = dom.html();
        assert!(source_links(&html).is_empty());
        assert_eq!(count(&html, ".accordion-body"), 0);
    }

    #[test]
    fn faq_sections_open_independently() {
        let mut dom = ClickableDom::new(VirtualDom::new(FaqView));
        dom.click(0);
        dom.click(3);
        let html = dom.html();
        assert_eq!(count(&html, ".accordion-body"), 2);
        assert_eq!(count(&html, "[aria-expanded=\"true\"]"), 2);

        dom.click(0);
        assert_eq!(count(&dom.html(), ".accordion-body"), 1);
    }
}
