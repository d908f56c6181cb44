//! Answers arithmetic questions like "what is 3 times (4 + 1)".

const WORD_OPERATORS: [(&str, &str); 6] = [
    ("to the power of", "^"),
    ("multiplied by", "*"),
    ("divided by", "/"),
    ("times", "*"),
    ("plus", "+"),
    ("minus", "-"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(f64),
    Op(char),
    Open,
    Close,
}

fn tokenize(expr: &str) -> Option<Vec<Token>> {
    let mut tokens = vec![];
    let mut chars = expr.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            ' ' => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut number = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        number.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Num(number.parse().ok()?));
            }
            '+' | '-' | '*' | '/' | '^' => {
                tokens.push(Token::Op(c));
                chars.next();
            }
            '(' => {
                tokens.push(Token::Open);
                chars.next();
            }
            ')' => {
                tokens.push(Token::Close);
                chars.next();
            }
            _ => return None,
        }
    }
    Some(tokens)
}

/// Recursive descent over the token stream.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let t = self.peek();
        self.pos += 1;
        t
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Option<f64> {
        let mut value = self.term()?;
        while let Some(Token::Op(op @ ('+' | '-'))) = self.peek() {
            self.next();
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Some(value)
    }

    // term := power (('*' | '/') power)*
    fn term(&mut self) -> Option<f64> {
        let mut value = self.power()?;
        while let Some(Token::Op(op @ ('*' | '/'))) = self.peek() {
            self.next();
            let rhs = self.power()?;
            value = if op == '*' { value * rhs } else { value / rhs };
        }
        Some(value)
    }

    // power := unary ('^' power)?
    fn power(&mut self) -> Option<f64> {
        let base = self.unary()?;
        if let Some(Token::Op('^')) = self.peek() {
            self.next();
            return Some(base.powf(self.power()?));
        }
        Some(base)
    }

    fn unary(&mut self) -> Option<f64> {
        match self.peek()? {
            Token::Op('-') => {
                self.next();
                Some(-self.unary()?)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Option<f64> {
        match self.next()? {
            Token::Num(n) => Some(n),
            Token::Open => {
                let value = self.expr()?;
                match self.next()? {
                    Token::Close => Some(value),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// value of a bare arithmetic expression, None if it isn't one
fn eval_expr(expr: &str) -> Option<f64> {
    let tokens = tokenize(expr)?;
    let has_binary_op = tokens
        .iter()
        .skip(1)
        .any(|t| matches!(t, Token::Op(_)));
    if !has_binary_op {
        return None;
    }
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;
    (parser.pos == parser.tokens.len() && value.is_finite()).then_some(value)
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.6}");
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

/// Finds an arithmetic expression in the text and answers `expr = value`.
pub fn evaluate(text: &str) -> Option<String> {
    let mut text = text.to_lowercase();
    for (word, op) in WORD_OPERATORS {
        text = text.replace(word, op);
    }

    let is_expr_char = |c: char| c.is_ascii_digit() || " .+-*/^()".contains(c);
    text.split(|c: char| !is_expr_char(c))
        .map(str::trim)
        .filter(|run| run.chars().any(|c| c.is_ascii_digit()))
        .find_map(|run| eval_expr(run).map(|value| format!("{run} = {}", format_value(value))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_questions() {
        assert_eq!(evaluate("what is 2 + 3?").as_deref(), Some("2 + 3 = 5"));
        assert_eq!(
            evaluate("What's 3 times (4 plus 1)").as_deref(),
            Some("3 * (4 + 1) = 15")
        );
        assert_eq!(evaluate("7 divided by 2").as_deref(), Some("7 / 2 = 3.5"));
        assert_eq!(evaluate("2^3^2").as_deref(), Some("2^3^2 = 512"));
        assert_eq!(evaluate("-4 * -2").as_deref(), Some("-4 * -2 = 8"));
    }

    #[test]
    fn precedence() {
        assert_eq!(eval_expr("1 + 2 * 3"), Some(7.0));
        assert_eq!(eval_expr("(1 + 2) * 3"), Some(9.0));
        assert_eq!(eval_expr("10 - 4 - 3"), Some(3.0));
    }

    #[test]
    fn ignores_non_math() {
        assert_eq!(evaluate("hello there"), None);
        assert_eq!(evaluate("i have 3 cats"), None);
        assert_eq!(evaluate("well-known"), None);
        assert_eq!(evaluate("1 / 0"), None);
        assert_eq!(evaluate("(1 + 2"), None);
    }

    #[test]
    fn formats_fractions() {
        assert_eq!(format_value(1.0 / 3.0), "0.333333");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-8.0), "-8");
    }
}
