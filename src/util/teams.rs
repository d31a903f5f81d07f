//! Favorite-team to report lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected views render an embedded analytics report chosen by the signed-in
//! user's favorite team. The table below is the only source of report URLs;
//! [`resolve`] always lands on one of its rows.

#[cfg(test)]
#[path = "teams_test.rs"]
mod teams_test;

/// Team used whenever the profile carries no recognizable team.
pub const DEFAULT_TEAM: &str = "Atlanta Hawks";

/// League-wide report shown on the dashboard route.
pub const LEAGUE_REPORT_URL: &str = "https://app.powerbi.com/reportEmbed?reportId=71c2ed4c-b32e-4ad4-8151-fec20492b6e2&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf";

/// One canonical team and its embedded report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamReport {
    /// Exact-cased canonical team name.
    pub name: &'static str,
    /// Embed URL for the team's report.
    pub report_url: &'static str,
}

static TEAM_REPORTS: &[TeamReport] = &[
    TeamReport {
        name: "Atlanta Hawks",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=a05b2eed-3429-4052-9881-d05df802b153&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Boston Celtics",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=743e8d38-e622-4330-9b27-8f200ff4b8c8&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Brooklyn Nets",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=9a430350-dc42-4926-990a-ae244f853dfe&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Charlotte Hornets",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=a5ed183e-e5a0-4ffd-80f1-b2e5dabc64e4&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Chicago Bulls",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=288d3b37-a168-45e7-a9b3-cfffca035b3b&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Cleveland Cavaliers",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=029f1e2e-bd09-4a10-9427-4a88cb96af1f&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Dallas Mavericks",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=98d4d39f-04ce-4349-a01e-6a4f01798ba9&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Denver Nuggets",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=c9b4454c-69da-4b03-94eb-6037434ef35f&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Detroit Pistons",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=37705011-7641-4cd1-bca4-4bfc648a6afb&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Golden State Warriors",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=5316298a-a58b-470d-b7c7-13afd569b97d&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Houston Rockets",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=6b81c746-ea26-40fa-9146-90539b4f45dc&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Indiana Pacers",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=b953e6cd-ba2f-40c3-bf1d-507aa6ee3c32&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "LA Clippers",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=96a0b9f0-e993-4c07-bd63-8a62d8502798&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Los Angeles Lakers",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=e075e088-b4cf-453e-9f36-7b09af0efdce&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Memphis Grizzlies",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=de88168d-73c5-4440-b3f2-9fc4c0ce2e0f&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Miami Heat",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=01d6fcdd-a0ef-4bc1-bd03-76d8dbe0c368&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Milwaukee Bucks",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=3d2ec1ec-e853-4806-b574-af13f6ac73b9&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Minnesota Timberwolves",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=7481d957-71af-4eaa-ba12-62358d6cca48&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "New Orleans Pelicans",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=ca89c456-eaee-449c-90f1-6cc4738a4db5&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "New York Knicks",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=1acb3f08-6a75-4e29-a4aa-267477df3724&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Oklahoma City Thunder",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=6ea468a6-b5f3-446c-9bbc-2ff248d4b74e&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Orlando Magic",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=81e3bc11-1fbc-47b6-9267-217e346aa327&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Philadelphia 76ers",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=25f8c2ee-b257-4f2e-b67c-f36967d0e7a5&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Phoenix Suns",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=e17a5cf9-30f8-4c35-97ef-b52895669982&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Portland Trail Blazers",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=fcde58a1-5dec-4192-8a59-7483dc1b21e6&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Sacramento Kings",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=df6c3294-1c0e-40e3-a984-4953f6bd2743&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "San Antonio Spurs",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=36913a32-5363-4fbd-9a94-c672be55ecac&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Toronto Raptors",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=a85312a9-bde0-4f46-a651-97e9f7d1bf08&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Utah Jazz",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=138a238f-ec45-4d0b-9d62-022e3fd17a8e&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
    TeamReport {
        name: "Washington Wizards",
        report_url: "https://app.powerbi.com/reportEmbed?reportId=883becd5-6c32-47fb-a8f9-a8253e8e223e&autoAuth=true&ctid=19d57598-97b0-442c-b74e-c855b0d87caf",
    },
];

/// Canonical team names in display order.
pub fn team_names() -> impl Iterator<Item = &'static str> {
    TEAM_REPORTS.iter().map(|team| team.name)
}

/// Case-insensitive lookup of a canonical team.
pub fn find(raw: &str) -> Option<TeamReport> {
    let wanted = raw.to_lowercase();
    TEAM_REPORTS
        .iter()
        .find(|team| team.name.to_lowercase() == wanted)
        .copied()
}

/// Resolve a stored team name to its canonical row, falling back to
/// [`DEFAULT_TEAM`] when the name is absent or unknown.
pub fn resolve(raw: Option<&str>) -> TeamReport {
    raw.and_then(find).unwrap_or_else(default_team)
}

fn default_team() -> TeamReport {
    TEAM_REPORTS
        .iter()
        .find(|team| team.name == DEFAULT_TEAM)
        .copied()
        .unwrap_or(TeamReport {
            name: DEFAULT_TEAM,
            report_url: LEAGUE_REPORT_URL,
        })
}
