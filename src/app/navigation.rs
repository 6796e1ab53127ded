use super::*;

impl App {
    /// Move the list selection down in the active tab (vim-style j or down).
    pub fn select_next(&mut self) {
        let len = self.visible_jobs().len();
        if len == 0 {
            return;
        }
        match self.job_tab {
            JobTab::Assigned => {
                if self.assigned_index + 1 < len {
                    self.assigned_index += 1;
                }
            }
            JobTab::Completed => {
                if self.completed_index + 1 < len {
                    self.completed_index += 1;
                }
            }
        }
    }

    /// Move the list selection up in the active tab (vim-style k or up).
    pub fn select_previous(&mut self) {
        match self.job_tab {
            JobTab::Assigned => {
                self.assigned_index = self.assigned_index.saturating_sub(1);
            }
            JobTab::Completed => {
                self.completed_index = self.completed_index.saturating_sub(1);
            }
        }
    }

    pub fn switch_tab(&mut self, tab: JobTab) {
        self.job_tab = tab;
        self.clear_status();
    }

    pub fn toggle_tab(&mut self) {
        let tab = match self.job_tab {
            JobTab::Assigned => JobTab::Completed,
            JobTab::Completed => JobTab::Assigned,
        };
        self.switch_tab(tab);
    }
}
