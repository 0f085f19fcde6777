/*!
# Introductory Tutorial for RPN

Begin by opening a terminal and running the executable. If you get the
following, you are ready for this tutorial. Type CTRL-D or `quit` to
leave the calculator.
<pre><code>&nbsp;  RPN calculator ready. Numbers require Enter; operators (+, -, *, /) execute immediately.
&nbsp;  Commands: sin, cos, tan, inv, sqrt, log, ln, pow, sq, neg, pi, e, swap, drop, dup, clear, help, quit.
&nbsp;> █
</code></pre>

A calculator in Reverse Polish Notation has no parentheses and no
operator precedence. You enter the operands first and the operation
last. Every number you type followed by ENTER is pushed on the stack.
The stack is shown after every command, oldest value at the top of the
window and newest at the bottom.

<pre><code>&nbsp;> 3
&nbsp;  Pushed 3
&nbsp;  Stack (bottom -> top):
&nbsp;    -:
&nbsp;    -:
&nbsp;    -:
&nbsp;    -:
&nbsp;    1: 3
</code></pre>

The four operators `+ - * /` run the moment you type them on an empty
line. There is no need to press ENTER. Type `4` ENTER then `+` and the
two values are replaced by their sum.

<pre><code>&nbsp;> 4
&nbsp;> +
&nbsp;  Result: 7
</code></pre>

Because `-` runs immediately, negative numbers are entered as a
positive number followed by `neg`.

Operations that take two values use them in the order they were
entered. `10 4 -` is `6` and `2 10 pow` is `1024`. The other words are:

| Word            | Action                                           |
|-----------------|--------------------------------------------------|
| `sq` `neg` `inv`| square, negate, reciprocal of the top value      |
| `sin` `cos` `tan` | trigonometry in radians                        |
| `sqrt` `log` `ln` | square root, base 10 log, natural log          |
| `pi` `e`        | push a constant                                  |
| `dup` `drop` `swap` | copy, discard, exchange the top values       |
| `clear` `clr`   | empty the stack                                  |
| `help`          | list every word                                  |
| `quit` `q`      | leave                                            |

Words may be typed in any case.

Mistakes never change the stack. Dividing by zero, taking the square
root of a negative number or typing a word the calculator does not know
prints an error and leaves every value where it was.

<pre><code>&nbsp;> 0
&nbsp;> /
&nbsp;  Error: division by zero
</code></pre>

When input is not a terminal, every line is taken as one token, so a
calculation can be piped in:

<pre><code>&nbsp;$ printf '2\n3\npow\n' | rpn
</code></pre>
*/
