use crate::campaign::Campaign;
use crate::user::UserId;

/// The campaigns every fresh store starts with.
pub fn campaigns() -> Vec<Campaign> {
    vec![
        campaign("1", "Divavu", "9/19/2021", "3/9/2023", 88377.0, 3),
        campaign("2", "Jaxspan", "11/21/2023", "2/21/2024", 608715.0, 6),
        campaign("3", "Miboo", "11/1/2022", "6/20/2022", 239507.0, 7),
        campaign("4", "Trilith", "8/25/2022", "11/30/2022", 179838.0, 1),
        campaign("5", "Layo", "11/28/2017", "3/10/2023", 837850.0, 9),
        campaign("6", "Photojam", "7/25/2019", "6/23/2021", 858131.0, 3),
        campaign("7", "Blogtag", "6/27/2019", "1/15/2021", 109078.0, 2),
        campaign("8", "Rhyzio", "10/13/2020", "1/25/2022", 272552.0, 4),
        campaign("9", "Zoomcast", "9/6/2021", "11/10/2023", 301919.0, 8),
        campaign("10", "Realbridge", "3/5/2021", "10/2/2026", 505602.0, 5),
    ]
}

fn campaign(
    id: &str,
    name: &str,
    start_date: &str,
    end_date: &str,
    budget: f64,
    user_id: UserId,
) -> Campaign {
    Campaign {
        id: Some(id.to_string()),
        name: name.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        budget,
        user_id: Some(user_id),
    }
}
