use maud::{html, Markup, DOCTYPE};

const STYLE: &str = "
body { font-family: system-ui, sans-serif; max-width: 720px; margin: 0 auto; padding: 0 1rem; color: #222; }
header { display: flex; align-items: center; gap: .75rem; padding: 1rem 0; border-bottom: 1px solid #eee; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.25rem; margin: 1.5rem 0; }
form.estimate { display: grid; grid-template-columns: 10rem 1fr; gap: .6rem 1rem; align-items: center; }
form.estimate button { grid-column: 2; justify-self: start; padding: .5rem 1.25rem; }
.prediction { font-size: 1.2rem; font-weight: 600; color: #15803d; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLE) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Lagos House Price Estimator" }
                }
                (content)
            }
        }
    }
}
