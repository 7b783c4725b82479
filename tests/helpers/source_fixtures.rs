//! PHP source fixtures shared by integration tests.

pub const REPOSITORY: &str = r#"<?php
/**
 * Order storage.
 */
namespace Shop\Orders;

use Shop\Core\Entity;
use Shop\Core\Contracts\{Repository as RepositoryContract, Countable};
use Psr\Log\LoggerInterface as Logger;

define('ORDERS_TABLE', 'orders');

/**
 * Persists orders.
 */
final class OrderRepository extends Entity implements RepositoryContract, Countable
{
    use \Shop\Core\Traits\Timestamps;

    const VERSION = 3;

    /** @var Logger */
    private $logger;

    protected static $cache = array();

    /**
     * @param Logger $logger
     * @param array $options
     */
    public function __construct($logger, array $options = array('ttl' => 60))
    {
        $this->logger = $logger;
    }

    /**
     * @return Order|null
     */
    public function find(int $id)
    {
        $order = new Order($id);
        return $order;
    }

    abstract protected function table();

    public static function count(): int { return 0; }
}

interface Auditable
{
    public function audit(Logger $logger, &$trail, ...$rest);
}

function helper(Order $order = null) {
    return $order;
}
"#;

pub const TEMPLATE: &str = r#"<html>
<body>
<?php
namespace Views;

$title = page_title();
?>
<h1><?= $title ?></h1>
<?php
class Widget { public $label; }
?>
</body>
</html>
"#;
