// file: src/report/template.rs
// description: static fragments of the HTML report
// reference: self-contained page with inline css

pub const STYLE: &str = r#"        <style>
            html, body {
                padding: 10px;
                margin: 10px;
            }

            body {
                font-family: BlinkMacSystemFont, -apple-system, "Segoe UI", "Roboto", "Oxygen", "Ubuntu", "Cantarell", "Fira Sans", "Droid Sans", "Helvetica Neue", "Helvetica", "Arial", sans-serif;
            }

            h1 {
                text-align: center;
            }

            .metadata {
                color: #555;
                font-size: 0.9rem;
                margin-bottom: 1.5rem;
            }

            .metadata .failed {
                color: #b00020;
            }

            ol.words li {
                padding: 2px 0;
            }

            th {
                position: sticky;
                top: 0;
                background: #6c7ae0;
                text-align: left;
                font-weight: normal;
                font-size: 1.1rem;
                color: white;
                padding: 15px 10px;
                min-width: 150px;
            }

            th:last-child {
                border: 0;
            }

            td {
                padding: 10px;
                vertical-align: top;
            }

            tr:nth-child(even) td {
                background: #f8f6ff;
            }

            a.top {
                font-size: 0.8rem;
            }
        </style>
"#;

pub const TABLE_HEAD: &str = r#"        <table>
            <thead>
                <tr>
                    <th>Word (frequency)</th>
                    <th>Documents</th>
                    <th>Sentences</th>
                </tr>
            </thead>
            <tbody>
"#;

pub const TAIL: &str = r#"            </tbody>
        </table>
    </body>
</html>
"#;

pub fn head(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n    <head>\n        <meta charset=\"utf-8\">\n        <title>{title}</title>\n{STYLE}    </head>\n    <body id=\"top\">\n        <h1>{title}</h1>\n"
    )
}
