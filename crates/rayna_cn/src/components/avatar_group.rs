//! Stacked avatars with an overflow counter

use rayna_core::{cx, div, ElementBuilder, Node};

use super::avatar::{Avatar, AvatarSize, AvatarType};

const DEFAULT_MAX_VISIBLE: usize = 5;

impl AvatarSize {
    /// Ring width used when avatars overlap
    pub fn group_border(&self) -> &'static str {
        match self {
            AvatarSize::Xs => "border-1",
            AvatarSize::Sm => "border-1.5",
            AvatarSize::Md | AvatarSize::Lg => "border-2",
            AvatarSize::Xl | AvatarSize::Xxl => "border-3",
        }
    }

    /// Overlap used when no explicit spacing is given
    pub fn group_spacing(&self) -> &'static str {
        match self {
            AvatarSize::Xs => "-4px",
            AvatarSize::Sm => "-6px",
            AvatarSize::Md => "-8px",
            AvatarSize::Lg => "-11px",
            AvatarSize::Xl => "-12px",
            AvatarSize::Xxl => "-16px",
        }
    }
}

/// A row of overlapping avatars
///
/// Earlier avatars sit above later ones. Anything past `max_visible` is
/// folded into a trailing `+N` initials avatar.
#[derive(Clone, Debug)]
pub struct AvatarGroup {
    avatars: Vec<Avatar>,
    max_visible: usize,
    size: AvatarSize,
    spacing: Option<String>,
    class: String,
}

impl Default for AvatarGroup {
    fn default() -> Self {
        Self {
            avatars: Vec::new(),
            max_visible: DEFAULT_MAX_VISIBLE,
            size: AvatarSize::default(),
            spacing: Some("-8px".to_string()),
            class: String::new(),
        }
    }
}

impl AvatarGroup {
    pub fn new(avatars: impl IntoIterator<Item = Avatar>) -> Self {
        Self {
            avatars: avatars.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn max_visible(mut self, max: usize) -> Self {
        self.max_visible = max;
        self
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    /// Negative margin between avatars; `None` derives it from the size
    pub fn spacing(mut self, spacing: Option<String>) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn remaining(&self) -> usize {
        self.avatars.len().saturating_sub(self.max_visible)
    }
}

impl ElementBuilder for AvatarGroup {
    fn build(&self) -> Node {
        let visible = &self.avatars[..self.avatars.len().min(self.max_visible)];
        let spacing = self
            .spacing
            .clone()
            .unwrap_or_else(|| self.size.group_spacing().to_string());
        let border = self.size.group_border();

        let stacked = visible.iter().enumerate().map(|(index, avatar)| {
            avatar
                .clone()
                .size(self.size)
                .class(format!("{border} border-white rounded-full shadow-sm"))
                .style("margin-right", &spacing)
                .style("z-index", visible.len() - index)
                .style("position", "relative")
        });

        let remaining = self.remaining();
        let counter = (remaining > 0).then(|| {
            Avatar::new()
                .avatar_type(AvatarType::Initials)
                .initials(format!("+{remaining}"))
                .size(self.size)
                .class(format!("{border} border-white shadow-sm"))
        });

        div()
            .class(&cx(["flex items-center", self.class.as_str()]))
            .children(stacked)
            .child_opt(counter)
            .into_node()
    }
}

pub fn avatar_group(avatars: impl IntoIterator<Item = Avatar>) -> AvatarGroup {
    AvatarGroup::new(avatars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::avatar::avatar;

    fn initials(n: usize) -> Vec<Avatar> {
        (0..n)
            .map(|i| avatar().avatar_type(AvatarType::Initials).initials(format!("A{i}")))
            .collect()
    }

    #[test]
    fn test_overflow_counter() {
        let group = avatar_group(initials(8));
        assert_eq!(group.remaining(), 3);
        assert!(group.build().text_content().ends_with("+3"));
    }

    #[test]
    fn test_no_counter_when_within_limit() {
        let group = avatar_group(initials(3));
        assert_eq!(group.remaining(), 0);
        assert!(!group.build().text_content().contains('+'));
    }

    #[test]
    fn test_stacking_order() {
        let node = avatar_group(initials(3)).build();
        let root = node.as_element().unwrap();
        let z: Vec<_> = root
            .child_nodes()
            .iter()
            .filter_map(|n| n.as_element())
            .filter_map(|e| e.get_style("z-index"))
            .collect();
        assert_eq!(z, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_spacing_from_size() {
        let node = avatar_group(initials(2))
            .size(AvatarSize::Lg)
            .spacing(None)
            .build();
        let first = node.as_element().unwrap().child_nodes()[0].as_element().unwrap();
        assert_eq!(first.get_style("margin-right"), Some("-11px"));
    }
}
