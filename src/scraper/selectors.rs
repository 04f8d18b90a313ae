use crate::scraper::ScraperError;
use scraper::Selector;

// Result card layout on nigeriapropertycentre.com
//  .property-list
//   └── .col-md-12                    one per card
//        ├── .content-title           title
//        ├── .voffset-bottom-10 strong  address
//        ├── .aux-info li:nth-child(1..4)  bed / bath / toilet / parking
//        └── .price + .price          asking price
pub struct ListingSelectors {
    pub card: Selector,
    pub title: Selector,
    pub address: Selector,
    pub bed: Selector,
    pub bath: Selector,
    pub toilet: Selector,
    pub parking_space: Selector,
    pub price: Selector,
}

impl ListingSelectors {
    pub fn new() -> Result<Self, ScraperError> {
        let parse = |css: &str| {
            Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("{css}: {e}")))
        };

        Ok(Self {
            card: parse(".property-list .col-md-12")?,
            title: parse(".content-title")?,
            address: parse(".voffset-bottom-10 strong")?,
            bed: parse(".aux-info li:nth-child(1)")?,
            bath: parse(".aux-info li:nth-child(2)")?,
            toilet: parse(".aux-info li:nth-child(3)")?,
            parking_space: parse(".aux-info li:nth-child(4)")?,
            price: parse(".price + .price")?,
        })
    }
}
