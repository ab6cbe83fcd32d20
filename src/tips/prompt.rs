//! Prompt rendering for tips requests

use super::request::TipsRequest;

/// Render the prompt sent to the model
pub fn render_prompt(request: &TipsRequest) -> String {
    let mut prompt = String::from(
        "You are an AI-powered personal finance assistant. Analyze the user's income, \
         expenses, and budget limits to provide personalized recommendations for saving \
         and managing expenses.\n",
    );

    prompt.push_str("\nIncome:\n");
    for entry in &request.income {
        prompt.push_str(&format!(
            "- Category: {}, Amount: {}\n",
            entry.category,
            entry.amount.value()
        ));
    }

    prompt.push_str("\nExpenses:\n");
    for entry in &request.expenses {
        prompt.push_str(&format!(
            "- Category: {}, Amount: {}\n",
            entry.category,
            entry.amount.value()
        ));
    }

    prompt.push_str("\nBudget Limits:\n");
    for entry in &request.budget_limits {
        prompt.push_str(&format!(
            "- Category: {}, Limit: {}\n",
            entry.category,
            entry.limit.value()
        ));
    }

    prompt.push_str(
        "\nProvide a numbered list of actionable recommendations for the user to save money \
         and manage their expenses better. Also provide a short summary of expenses and \
         incorporate the budget tips in this summary.\n",
    );
    prompt.push_str(
        "\nRespond with JSON only, in the form \
         {\"recommendations\": [\"...\"], \"summary\": \"...\"}\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseCategory, IncomeCategory};
    use crate::tips::request::{ExpenseEntry, IncomeEntry, LimitEntry};

    #[test]
    fn test_lists_each_section() {
        let request = TipsRequest {
            income: vec![IncomeEntry {
                category: IncomeCategory::Salary,
                amount: Amount::new(1000.0),
            }],
            expenses: vec![
                ExpenseEntry {
                    category: ExpenseCategory::Groceries,
                    amount: Amount::new(50.5),
                },
                ExpenseEntry {
                    category: ExpenseCategory::Rent,
                    amount: Amount::new(800.0),
                },
            ],
            budget_limits: vec![LimitEntry {
                category: ExpenseCategory::Groceries,
                limit: Amount::new(300.0),
            }],
        };

        let prompt = render_prompt(&request);

        assert!(prompt.contains("- Category: Salary, Amount: 1000\n"));
        assert!(prompt.contains("- Category: Groceries, Amount: 50.5\n"));
        assert!(prompt.contains("- Category: Rent, Amount: 800\n"));
        assert!(prompt.contains("- Category: Groceries, Limit: 300\n"));
        assert!(prompt.contains("numbered list"));
        assert!(prompt.contains("\"recommendations\""));
    }

    #[test]
    fn test_empty_request_still_has_headings() {
        let prompt = render_prompt(&TipsRequest::default());
        assert!(prompt.contains("Income:\n"));
        assert!(prompt.contains("Expenses:\n"));
        assert!(prompt.contains("Budget Limits:\n"));
    }
}
