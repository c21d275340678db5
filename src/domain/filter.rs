use super::models::MenuItem;

/// Indices of the items whose name or command contains `query`, ignoring case.
///
/// Order follows `items`. An empty query matches everything.
#[must_use]
pub fn matching_indices(items: &[MenuItem], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let query_lower = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            item.name.to_lowercase().contains(&query_lower)
                || item.command.to_lowercase().contains(&query_lower)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Stable substring filter over `items`.
#[must_use]
pub fn filter(items: &[MenuItem], query: &str) -> Vec<MenuItem> {
    matching_indices(items, query)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Create pull request", "~/dotfiles/lazygit/create-pr.sh"),
            MenuItem::new("Start development server", "yarn dev"),
            MenuItem::new(
                "Start Docker services",
                "docker compose -f ~/dev/workspace/docker-compose-custom.yml up -d",
            ),
            MenuItem::new("Switch to Node 18", "nvm use 18"),
        ]
    }

    #[test]
    fn test_empty_query_matches_everything_in_order() {
        let all = items();
        assert_eq!(filter(&all, ""), all);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let result = filter(&items(), "docker");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Start Docker services");

        let result = filter(&items(), "START");
        let names: Vec<_> = result.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Start development server", "Start Docker services"]);
    }

    #[test]
    fn test_matches_command_text() {
        let result = filter(&items(), "NVM");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Switch to Node 18");

        // "dev" hits one name and two commands; order stays as listed.
        let names: Vec<_> = filter(&items(), "dev")
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["Start development server", "Start Docker services"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter(&items(), "zzz").is_empty());
        assert!(matching_indices(&[], "anything").is_empty());
    }

    #[test]
    fn test_refilter_is_idempotent() {
        let all = items();
        for query in ["", "s", "start", "yarn", "-d", "zzz", "Node 1"] {
            let once = filter(&all, query);
            assert_eq!(filter(&once, query), once, "query {query:?}");
        }
    }

    #[test]
    fn test_result_is_subsequence_of_input() {
        let all = items();
        for query in ["e", "r", "dev", "~/"] {
            let indices = matching_indices(&all, query);
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
            for (i, item) in all.iter().enumerate() {
                let hit = item.name.to_lowercase().contains(query)
                    || item.command.to_lowercase().contains(query);
                assert_eq!(indices.contains(&i), hit);
            }
        }
    }
}
