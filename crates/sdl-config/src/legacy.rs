//! Translation of the deprecated `--only` / `--except` selection flags into
//! the current-generation shape. Kept apart from the resolver's core logic
//! so the whole module can be deleted when the flags are removed.

use sdl_linter::{all_rule_names, RuleSelection};

/// Map the deprecated flags onto a [`RuleSelection`].
///
/// `--only` is a straight inclusion list. `--except` is resolved against
/// the registry as "all registered rules minus the named set"; names in the
/// exclusion list that are not registered simply exclude nothing. When both
/// are given, `--only` wins. Returns `None` when neither flag was given.
pub(crate) fn translate_legacy_selection(
    only: Option<&[String]>,
    except: Option<&[String]>,
) -> Option<RuleSelection> {
    if let Some(only) = only {
        return Some(RuleSelection::Only(only.to_vec()));
    }

    if let Some(except) = except {
        let keep = all_rule_names()
            .into_iter()
            .map(String::from)
            .filter(|name| !except.contains(name))
            .collect();
        return Some(RuleSelection::Only(keep));
    }

    None
}
