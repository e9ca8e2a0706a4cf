use crate::constants::HOME_PAGE_ID;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionContent {
    pub heading: &'static str,
    pub body: &'static str,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabContent {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    /// Highlight block that fades in when the tab is chosen.
    pub highlight: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub id: &'static str,
    pub title: &'static str,
    /// `None` keeps the page out of the header links.
    pub nav_label: Option<&'static str>,
    pub hero: bool,
    pub testimonials: bool,
    pub tabs: Vec<TabContent>,
    pub sections: Vec<SectionContent>,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "The tasting room tour was the highlight of our trip.",
            author: "Maren, Oslo",
        },
        Testimonial {
            quote: "Smooth, warm and honest. Exactly what a single malt should be.",
            author: "Thomas, Lyon",
        },
        Testimonial {
            quote: "We ordered a cask for our wedding and the team made it effortless.",
            author: "Priya and Sam, Leeds",
        },
        Testimonial {
            quote: "The gin masterclass is worth every penny.",
            author: "Joanna, Kraków",
        },
    ]
}

pub fn pages() -> Vec<PageContent> {
    vec![
        PageContent {
            id: HOME_PAGE_ID,
            title: "Highland Still House",
            nav_label: Some("Home"),
            hero: true,
            testimonials: true,
            tabs: Vec::new(),
            sections: vec![
                SectionContent {
                    heading: "Distilled by the loch",
                    body: "Copper pot stills, spring water and a lot of patience.",
                    height: 220.0,
                },
                SectionContent {
                    heading: "Visit us",
                    body: "Tours run daily from ten until four, booking recommended.",
                    height: 220.0,
                },
            ],
        },
        PageContent {
            id: "spirits-page",
            title: "Our Spirits",
            nav_label: Some("Spirits"),
            hero: false,
            testimonials: false,
            tabs: vec![
                TabContent {
                    id: "whiskey-content",
                    title: "Whiskey",
                    body: "Twelve years in sherry casks.",
                    highlight: Some("Notes of dried fruit, toffee and a whisper of peat."),
                },
                TabContent {
                    id: "gin-content",
                    title: "Gin",
                    body: "Eleven botanicals, four of them foraged on site.",
                    highlight: Some("Juniper forward with bright citrus and heather."),
                },
                TabContent {
                    id: "liqueur-content",
                    title: "Liqueur",
                    body: "Bramble and honey, bottled each autumn.",
                    highlight: None,
                },
            ],
            sections: vec![SectionContent {
                heading: "Cask programme",
                body: "Private casks can be reserved from a single barrel upwards.",
                height: 240.0,
            }],
        },
        PageContent {
            id: "about-page",
            title: "About",
            nav_label: Some("About"),
            hero: false,
            testimonials: false,
            tabs: Vec::new(),
            sections: vec![
                SectionContent {
                    heading: "Since 1887",
                    body: "Five generations have run the still house.",
                    height: 260.0,
                },
                SectionContent {
                    heading: "Our people",
                    body: "Twelve distillers, two coopers and one very old cat.",
                    height: 260.0,
                },
                SectionContent {
                    heading: "Sustainability",
                    body: "Heat from the stills warms the village school.",
                    height: 260.0,
                },
            ],
        },
        PageContent {
            id: "contact-page",
            title: "Contact",
            nav_label: Some("Contact"),
            hero: false,
            testimonials: false,
            tabs: Vec::new(),
            sections: vec![SectionContent {
                heading: "Find us",
                body: "Still House Road, Lochside. hello@stillhouse.example",
                height: 200.0,
            }],
        },
    ]
}
