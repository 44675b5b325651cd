//! Integration tests for merge currying.

#![cfg(feature = "merge")]

use std::cell::RefCell;
use std::rc::Rc;

use keyword_curry::dictionary;
use keyword_curry::ext::HashCurryExt;
use keyword_curry::merge::{MergeCurry, merge_curry};
use keyword_curry::step::Step;
use keyword_curry::value::{Dictionary, Value};
use rstest::{fixture, rstest};

/// Records each merged dictionary a target receives.
#[derive(Clone, Default)]
struct Spy {
    calls: Rc<RefCell<Vec<Dictionary>>>,
}

impl Spy {
    fn curried(&self, count: usize) -> MergeCurry<&'static str> {
        let calls = Rc::clone(&self.calls);
        merge_curry(
            move |merged: Dictionary| {
                calls.borrow_mut().push(merged);
                "return value"
            },
            count,
        )
    }

    fn calls(&self) -> Vec<Dictionary> {
        self.calls.borrow().clone()
    }
}

#[fixture]
fn spy() -> Spy {
    Spy::default()
}

fn partial<R>(step: Step<MergeCurry<R>, R>) -> MergeCurry<R> {
    step.partial().expect("expected a partial wrapper")
}

fn arg_one() -> Dictionary {
    dictionary! { "one" => 1 }
}

fn arg_two() -> Dictionary {
    dictionary! { "two" => 2 }
}

fn arg_three() -> Dictionary {
    dictionary! { "three" => 3 }
}

#[rstest]
fn test_returns_another_wrapper_before_any_call(spy: Spy) {
    let curried = spy.curried(1);
    assert_eq!(curried.remaining(), 1);
    assert!(spy.calls().is_empty());
}

#[rstest]
fn test_count_of_one_dispatches_immediately(spy: Spy) {
    let result = spy.curried(1).call([arg_one()]);

    assert!(result.is_complete());
    assert_eq!(result.complete(), Some("return value"));
    assert_eq!(spy.calls(), vec![arg_one()]);
}

#[rstest]
fn test_dispatches_after_count_dictionaries(spy: Spy) {
    let curried = partial(spy.curried(3).call([arg_one()]));
    let curried = partial(curried.call([arg_two()]));
    assert!(spy.calls().is_empty());

    let result = curried.call([arg_three()]).complete();

    assert_eq!(result, Some("return value"));
    assert_eq!(spy.calls().len(), 1);
}

#[rstest]
fn test_accepts_several_dictionaries_per_call(spy: Spy) {
    let curried = partial(spy.curried(3).call([arg_one(), arg_two()]));
    assert_eq!(curried.remaining(), 1);

    curried.call([arg_three()]);
    assert_eq!(spy.calls().len(), 1);
}

#[rstest]
fn test_dispatches_with_a_single_merged_dictionary(spy: Spy) {
    let curried = partial(spy.curried(3).call([arg_one()]));
    let curried = partial(curried.call([arg_two()]));
    curried.call([arg_three()]);

    assert_eq!(
        spy.calls(),
        vec![dictionary! { "one" => 1, "two" => 2, "three" => 3 }]
    );
}

#[rstest]
fn test_merges_in_arrival_order(spy: Spy) {
    let curried = partial(spy.curried(3).call([dictionary! { "overwrite_me" => "not_overwritten" }]));
    let curried = partial(curried.call([dictionary! { "whatever" => "whatever" }]));
    curried.call([dictionary! { "overwrite_me" => "overwritten" }]);

    let merged = spy.calls().remove(0);
    assert_eq!(
        merged,
        dictionary! { "whatever" => "whatever", "overwrite_me" => "overwritten" }
    );
    assert_eq!(merged.get("overwrite_me"), Some(&Value::from("overwritten")));
}

#[rstest]
fn test_branches_are_independent(spy: Spy) {
    let base = partial(spy.curried(2).call([arg_one()]));

    base.clone().call([arg_two()]);
    base.clone().call([arg_three()]);

    assert_eq!(
        spy.calls(),
        vec![
            dictionary! { "one" => 1, "two" => 2 },
            dictionary! { "one" => 1, "three" => 3 },
        ]
    );
    assert_eq!(base.collected(), &[arg_one()][..]);
}

#[rstest]
fn test_hash_curry_method() {
    let curried = (|merged: Dictionary| merged.len()).hash_curry(2);
    let curried = curried.call_one(arg_one()).partial().unwrap();

    assert_eq!(curried.call_one(arg_two()).complete(), Some(2));
}

#[rstest]
fn test_vec_monoid_concatenates() {
    let curried = merge_curry(|items: Vec<i32>| items, 2);
    let curried = curried.call([vec![1, 2]]).partial().unwrap();

    assert_eq!(curried.call([vec![3]]).complete(), Some(vec![1, 2, 3]));
}
