//! HTML pages, rendered with maud.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use mondo_core::lookup::{CountryView, DestinationView, RegionalLookup, CARD_COUNTRIES, CARD_DESTINATIONS};
use mondo_core::model::RegionalData;
use mondo_core::text::{display_name, slugify};

/// Languages the site is published in.
pub const LANGUAGES: &[&str] = &["en", "es", "fr", "it"];

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1488646953014-85cb44e25828?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80";

const STYLE: &str = r#"
body{margin:0;font-family:system-ui,sans-serif;color:#1f2937}
a{color:inherit}
.hero{padding:4rem 1rem;color:#fff;text-align:center;background-size:cover;background-position:center}
.logo{position:absolute;top:1rem;right:1.5rem;font-weight:700;font-size:1.5rem}
.logo span:last-child{color:#60a5fa}
.search{position:relative;max-width:28rem;margin:2rem auto 0}
.search input{width:100%;padding:.75rem 1rem;border-radius:.5rem;border:0;box-sizing:border-box}
.search-results{position:absolute;width:100%;background:#fff;border-radius:.5rem;box-shadow:0 4px 12px #0003;text-align:left}
.search-results a{display:flex;justify-content:space-between;padding:.75rem 1rem;color:#111827;text-decoration:none}
.search-results span{font-size:.75rem;color:#6b7280}
.tabs{display:flex;overflow-x:auto;border-bottom:4px solid #2563eb;position:sticky;top:0;background:#fff}
.tabs a{padding:1rem 1.5rem;white-space:nowrap;text-decoration:none;color:#4b5563}
.tabs a.active{background:#2563eb;color:#fff}
main .content{max-width:72rem;margin:0 auto;padding:3rem 1rem}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(20rem,1fr));gap:2rem}
.card{border:1px solid #e5e7eb;border-radius:.75rem;padding:1.25rem}
.deals{color:#6b7280}
.dest{display:flex;justify-content:space-between;padding:.5rem;text-decoration:none}
.price{color:#16a34a;font-weight:600;font-size:.875rem}
.count{font-size:.875rem;color:#6b7280;background:#f3f4f6;padding:.25rem .5rem;border-radius:.25rem}
footer{padding:2rem 1rem;text-align:center;color:#6b7280;border-top:1px solid #e5e7eb}
footer a{margin:0 .5rem}
"#;

const SEARCH_SCRIPT: &str = r#"
const input = document.getElementById('search-input');
const results = document.getElementById('search-results');
const lang = input.dataset.lang;
let search = async (q) => (await fetch('/api/search?q=' + encodeURIComponent(q))).json();
try {
  const wasm = await import('/pkg/mondo_wasm.js');
  await wasm.default();
  wasm.load_search_data(await (await fetch('/api/search-data')).text());
  search = async (q) => wasm.search(q);
} catch (_) {}
input.addEventListener('input', async () => {
  const q = input.value;
  if (q.trim().length < 2) { results.hidden = true; return; }
  const hits = await search(q);
  results.replaceChildren(...hits.map((item) => {
    const a = document.createElement('a');
    a.href = `/${lang}/${item.type}/${item.slug}`;
    a.textContent = item.name;
    const tag = document.createElement('span');
    tag.textContent = item.type;
    a.append(tag);
    return a;
  }));
  results.hidden = hits.length === 0;
});
"#;

pub fn is_supported_language(lang: &str) -> bool {
    LANGUAGES.contains(&lang)
}

fn layout(lang: &str, title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | MondoExplora" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                (body)
                (footer(lang))
            }
        }
    }
}

fn footer(lang: &str) -> Markup {
    html! {
        footer {
            p { "MondoExplora - find the best hotels and exclusive deals around the world" }
            nav {
                @for l in LANGUAGES {
                    @if *l == lang {
                        strong { (l.to_uppercase()) }
                    } @else {
                        a href={ "/" (l) } { (l.to_uppercase()) }
                    }
                }
            }
        }
    }
}

fn destination_row(lang: &str, data: &RegionalData, country: &str, dest: &str, count: u64) -> Markup {
    let price = data.destination_price(country, dest);
    html! {
        a.dest href={ "/" (lang) "/destination/" (dest) } {
            div {
                div { (display_name(dest)) }
                div.price { "from $" (price) }
            }
            span.count { (count) }
        }
    }
}

/// Homepage: hero with search box, region tabs and the country grid of the
/// active region.
pub fn homepage(lang: &str, data: &RegionalData, requested_region: Option<&str>) -> Markup {
    let active = data.active_region(requested_region).map(|(name, _)| name);
    let countries = active
        .map(|r| data.top_countries(r, CARD_COUNTRIES))
        .unwrap_or_default();

    let body = html! {
        header.hero style={ "background-image:linear-gradient(135deg,rgba(0,0,0,.6) 0%,rgba(42,63,89,.8) 100%),url('" (HERO_IMAGE) "')" } {
            div.logo { span { "Mondo" } span { "Explora" } }
            h1 { "Find the best hotels and exclusive deals around the world" }
            div.search {
                input id="search-input" type="text" autocomplete="off" data-lang=(lang)
                    placeholder="Search destinations or countries...";
                div.search-results id="search-results" hidden {}
            }
        }
        nav.tabs {
            @for region in data.keys() {
                a.active[Some(region) == active]
                    href={ "/" (lang) "?region=" (slugify(region)) } { (region) }
            }
        }
        main {
            div.content {
                @if countries.is_empty() {
                    p { "No destinations available yet." }
                }
                div.grid {
                    @for (name, country) in &countries {
                        div.card {
                            h3 { (name) }
                            div.deals { (country.hotel_count) " hotels available" }
                            @for (dest, stats) in country.top_destinations(CARD_DESTINATIONS) {
                                (destination_row(lang, data, name, dest, stats.hotel_count))
                            }
                            p {
                                a href={ "/" (lang) "/country/" (slugify(name)) } {
                                    "View all destinations in " (name) " ›"
                                }
                            }
                        }
                    }
                }
            }
        }
        script type="module" { (PreEscaped(SEARCH_SCRIPT)) }
    };
    layout(lang, "Hotels by region", body)
}

/// Every stored destination of a country.
pub fn country_page(lang: &str, data: &RegionalData, country: CountryView<'_>) -> Markup {
    let body = html! {
        main {
            div.content {
                p { a href={ "/" (lang) "?region=" (slugify(country.region)) } { "‹ " (country.region) } }
                h1 { (country.name) }
                p.deals { (country.stats.hotel_count) " hotels available" }
                div.card {
                    @for (dest, stats) in country.stats.destinations.iter() {
                        (destination_row(lang, data, country.name, dest, stats.hotel_count))
                    }
                }
            }
        }
    };
    layout(lang, country.name, body)
}

pub fn destination_page(lang: &str, dest: DestinationView<'_>) -> Markup {
    let name = display_name(dest.name);
    let body = html! {
        main {
            div.content {
                p {
                    a href={ "/" (lang) "/country/" (slugify(dest.country)) } { "‹ " (dest.country) }
                }
                h1 { (name) }
                p.deals { (dest.stats.hotel_count) " hotels available" }
                p.price { "from $" (dest.price()) " per night" }
            }
        }
    };
    layout(lang, &name, body)
}

pub fn not_found(what: &str) -> Markup {
    let body = html! {
        main {
            div.content {
                h1 { "Page not found" }
                p { (what) }
                p { a href="/en" { "Back to the homepage" } }
            }
        }
    };
    layout("en", "Not found", body)
}
