use leptos::*;

use accomap_core::filter::{Category, FilterOption, FilterSelection};

#[component]
pub fn Sidebar<C, R>(
    selection: RwSignal<FilterSelection>,
    visible: Signal<Option<usize>>,
    error: Signal<Option<String>>,
    on_confirm: C,
    on_reset: R,
) -> impl IntoView
where
    C: Fn() + 'static + Copy,
    R: Fn() + 'static + Copy,
{
    let (open, set_open) = create_signal(false);

    let selected = selected_code(selection);

    let options = move || {
        selection.with(|s| {
            let code = s
                .selected_category()
                .map(|c| c.code.clone())
                .unwrap_or_default();
            s.options()
                .iter()
                .cloned()
                .enumerate()
                .map(|(idx, option)| (format!("{code}-{idx}"), idx, option))
                .collect::<Vec<_>>()
        })
    };

    view! {
      <div id="sidebar" class="sidebar" on:click = move |_| set_open.update(|o| *o = !*o)>
        <span class="sidebar-text">"Search for accommodation"</span>
      </div>
      <div
        id="myDropdown"
        class="dropdown-content"
        style:display = move || if open.get() { "block" } else { "none" }
      >
        <ul id="accommodationList">
          <For
            each = move || selection.with(|s| s.categories().to_vec())
            key = |category| category.code.clone()
            children = move |category| view! { <CategoryItem category selection /> }
          />
        </ul>
        { move || selected.get().map(|_| view! {
            <div class="separator"></div>
            <div class="more-filters-title">"More filters"</div>
            <For
              each = options
              key = |(key, _, _)| key.clone()
              children = move |(_, idx, option)| view! { <FilterCheckbox idx option selection /> }
            />
            <div class="button-container">
              <button id="confirmbutton" class="button" on:click = move |_| on_confirm()>"Confirm"</button>
              <button id="resetbutton" class="button" on:click = move |_| on_reset()>"Reset"</button>
            </div>
          })
        }
        { move || visible.get().map(|count| view! {
            <p class="visible-count">
              <span class="font-bold">{ count }</span>
              " accommodations"
            </p>
          })
        }
        { move || error.get().map(|err| view! { <p class="error">{ err }</p> }) }
      </div>
    }
}

/// Code of the selected category, unaffected by checkbox changes.
fn selected_code(selection: RwSignal<FilterSelection>) -> Memo<Option<String>> {
    create_memo(move |_| selection.with(|s| s.selected_category().map(|c| c.code.clone())))
}

#[component]
fn CategoryItem(category: Category, selection: RwSignal<FilterSelection>) -> impl IntoView {
    let Category { code, label, .. } = category;
    let data_value = code.clone();
    let selected = {
        let code = code.clone();
        move || selection.with(|s| s.is_selected(&code))
    };
    view! {
      <li
        data-value = data_value
        class:selected = selected
        on:click = move |_| {
            selection.update(|s| {
                s.select(&code);
            });
        }
      >
        { label }
      </li>
    }
}

#[component]
fn FilterCheckbox(
    idx: usize,
    option: FilterOption,
    selection: RwSignal<FilterSelection>,
) -> impl IntoView {
    let FilterOption { value, text } = option;
    view! {
      <label>
        <input
          type="checkbox"
          value = value
          prop:checked = move || selection.with(|s| s.is_checked(idx))
          on:change = move |ev| {
              let checked = event_target_checked(&ev);
              selection.update(|s| s.set_checked(idx, checked));
          }
        />
        " " { text }
      </label>
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use accomap_core::config::WidgetConfig;

    use super::*;

    #[test]
    fn checkbox_changes_do_not_notify_selected_code() {
        let runtime = create_runtime();
        let selection = create_rw_signal(FilterSelection::new(WidgetConfig::default().categories));
        let code = selected_code(selection);
        let runs = Rc::new(Cell::new(0));
        create_isomorphic_effect({
            let runs = Rc::clone(&runs);
            move |_| {
                code.track();
                runs.set(runs.get() + 1);
            }
        });
        assert_eq!(runs.get(), 1);

        selection.update(|s| {
            s.select("1");
        });
        assert_eq!(runs.get(), 2);
        assert_eq!(code.get_untracked().as_deref(), Some("1"));

        selection.update(|s| s.set_checked(0, true));
        selection.update(|s| s.set_checked(2, true));
        assert_eq!(runs.get(), 2);

        selection.update(FilterSelection::reset);
        assert_eq!(runs.get(), 3);
        assert!(code.get_untracked().is_none());

        runtime.dispose();
    }
}
