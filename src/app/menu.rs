use crate::domain::models::MenuItem;

/// The menu used when the config file does not provide `[[items]]`.
#[must_use]
pub fn default_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Create pull request", "~/dotfiles/lazygit/create-pr.sh"),
        MenuItem::new("Create release", "~/dotfiles/lazygit/release.sh"),
        MenuItem::new("Reboot system", "reboot"),
        MenuItem::new(
            "Reboot on Windows",
            "sudo grub2-reboot 'osprober-efi-2E0C-C336' && sudo reboot",
        ),
        MenuItem::new(
            "Restore database (skip migrations)",
            "yarn --cwd ~/dev/workspace/ restore-db:skip-migrations",
        ),
        MenuItem::new(
            "Start admin (production)",
            "sudo ~/dev/workspace/packages/admin/start.sh -p",
        ),
        MenuItem::new(
            "Start admin (staging)",
            "sudo ~/dev/workspace/packages/admin/start.sh -s",
        ),
        MenuItem::new("Start development server", "yarn dev"),
        MenuItem::new(
            "Start Docker services",
            "docker compose -f ~/dev/workspace/docker-compose-custom.yml up -d",
        ),
        MenuItem::new("Switch to Node 18", "nvm use 18"),
        MenuItem::new(
            "Solve HelpTech",
            "~/dotfiles/linear-automation/analyze-ticket.sh",
        ),
        MenuItem::new("Claude Code", "claude"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_are_distinct() {
        let items = default_items();
        let mut names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), items.len());
    }
}
